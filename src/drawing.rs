//! Shapes built out of plain turtle moves.

use thiserror::Error;

use crate::{
    geometry::chord_length,
    turtle::{Color, Turtle},
};

#[derive(Debug, Error, PartialEq)]
pub enum DrawError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub fn draw_square(turtle: &mut impl Turtle, side_length: f64) {
    for _ in 0..4 {
        turtle.forward(side_length);
        turtle.turn(90.0);
    }
}

/// Draws a regular polygon with `num_sides` sides inscribed in a circle of the given radius.
pub fn draw_approximate_circle(
    turtle: &mut impl Turtle,
    radius: f64,
    num_sides: i32,
) -> Result<(), DrawError> {
    if num_sides <= 0 {
        return Err(DrawError::InvalidArgument(format!(
            "a circle needs a positive number of sides, got {}",
            num_sides
        )));
    }

    let angle_between_sides = 360.0 / num_sides as f64;
    let side = chord_length(radius, angle_between_sides);

    for _ in 0..num_sides {
        turtle.forward(side);
        turtle.turn(angle_between_sides);
    }

    Ok(())
}

/// A handful of stars scattered around the canvas.
pub fn draw_personal_art(turtle: &mut impl Turtle) {
    const STARS: [Star; 3] = [
        Star {
            size: 160.0,
            color: Color::Orange,
            offset: (0.0, 0.0),
        },
        Star {
            size: 45.0,
            color: Color::Cyan,
            offset: (120.0, 70.0),
        },
        Star {
            size: 90.0,
            color: Color::Purple,
            offset: (-30.0, 140.0),
        },
    ];

    for star in STARS.iter() {
        let (angle, distance) = star.offset;
        move_without_drawing(turtle, angle, distance);
        star.draw(turtle);
    }
}

struct Star {
    size: f64,
    color: Color,

    /// Direction and distance to travel, relative to the previous star, before drawing.
    offset: (f64, f64),
}

impl Star {
    fn draw(&self, turtle: &mut impl Turtle) {
        turtle.color(self.color);
        turtle.pen_down();

        // Five points, each tip turning through 144 degrees.
        for _ in 0..5 {
            turtle.forward(self.size);
            turtle.turn(144.0);
        }
    }
}

fn move_without_drawing(turtle: &mut impl Turtle, angle: f64, distance: f64) {
    turtle.pen_up();
    turtle.turn(angle);
    turtle.forward(distance);
    turtle.turn(-angle);
    turtle.pen_down();
}
