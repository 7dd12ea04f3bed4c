//! The turtle: a cursor with a position, a heading and a pen, that leaves a trail of line
//! segments behind it while the pen is down.

use std::{fmt::Display, str::FromStr};

use thiserror::Error;

use crate::geometry::{normalize_heading, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Black,
    Gray,
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
    Cyan,
    Magenta,
}

// Must stay in the same order as the variants of `Color`.
const SVG_NAMES: [(Color, &str); 10] = [
    (Color::Black, "black"),
    (Color::Gray, "gray"),
    (Color::Red, "red"),
    (Color::Green, "green"),
    (Color::Blue, "blue"),
    (Color::Yellow, "yellow"),
    (Color::Purple, "purple"),
    (Color::Orange, "orange"),
    (Color::Cyan, "cyan"),
    (Color::Magenta, "magenta"),
];

impl Color {
    /// The name SVG uses for this color.
    pub fn svg_name(&self) -> &'static str {
        SVG_NAMES[*self as usize].1
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.svg_name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown color: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        SVG_NAMES
            .iter()
            .find(|(_, svg_name)| svg_name.eq_ignore_ascii_case(name))
            .map(|(color, _)| *color)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

/// One stroke left behind by the turtle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub color: Color,
}

/// Anything that can be steered like a turtle.
///
/// Drawing routines and the path planner are written against this trait so they don't care
/// whether the moves end up as strokes on a canvas or somewhere else.
pub trait Turtle {
    /// Moves `distance` units along the current heading.
    fn forward(&mut self, distance: f64);

    /// Rotates by `degrees`. Positive angles turn from the x axis towards the y axis.
    fn turn(&mut self, degrees: f64);

    fn pen_up(&mut self);
    fn pen_down(&mut self);

    /// Sets the color of future strokes.
    fn color(&mut self, color: Color);

    fn position(&self) -> Point;

    /// Heading in degrees.
    fn heading(&self) -> f64;
}

/// A turtle that records every pen-down move as a [`Segment`].
///
/// Owned by a single drawing session. Nothing in here is synchronized, so if it ever needs to be
/// shared between threads the owner has to wrap it in a lock.
#[derive(Debug, Clone)]
pub struct SimpleTurtle {
    position: Point,
    heading: f64,
    pen_down: bool,
    color: Color,
    path: Vec<Segment>,
}

impl Default for SimpleTurtle {
    fn default() -> Self {
        Self {
            position: Point::new(0.0, 0.0),
            heading: 0.0,
            pen_down: true,
            color: Color::default(),
            path: Vec::new(),
        }
    }
}

impl SimpleTurtle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything drawn so far, oldest stroke first.
    pub fn path(&self) -> &[Segment] {
        &self.path
    }
}

impl Turtle for SimpleTurtle {
    fn forward(&mut self, distance: f64) {
        let (sin, cos) = self.heading.to_radians().sin_cos();
        let start = self.position;
        let end = start + Point::new(cos, sin) * distance;

        if self.pen_down {
            self.path.push(Segment {
                start,
                end,
                color: self.color,
            });
        }

        self.position = end;
    }

    fn turn(&mut self, degrees: f64) {
        self.heading = normalize_heading(self.heading + degrees);
    }

    fn pen_up(&mut self) {
        self.pen_down = false;
    }

    fn pen_down(&mut self) {
        self.pen_down = true;
    }

    fn color(&mut self, color: Color) {
        self.color = color;
    }

    fn position(&self) -> Point {
        self.position
    }

    fn heading(&self) -> f64 {
        self.heading
    }
}
