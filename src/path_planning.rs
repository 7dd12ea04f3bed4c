//! Plans the turns and moves that walk a turtle through a list of waypoints.

use std::fmt::Display;

use crate::{
    geometry::{distance, normalize_heading, shortest_turn, Point},
    turtle::Turtle,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    Turn { angle: f64 },
    Forward { distance: f64 },
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Turn { angle } => write!(f, "turn {}", angle),
            Instruction::Forward { distance } => write!(f, "forward {}", distance),
        }
    }
}

/// Computes the instructions needed to visit `points` in order, starting from wherever the turtle
/// is now. The turtle itself is left alone.
pub fn find_path(turtle: &impl Turtle, points: &[Point]) -> Vec<Instruction> {
    let mut instructions = Vec::new();

    let mut current_position = turtle.position();
    let mut current_heading = normalize_heading(turtle.heading());

    for target in points.iter().copied() {
        let delta = target - current_position;

        let target_heading = normalize_heading(delta.y.atan2(delta.x).to_degrees());
        let turn_angle = shortest_turn(current_heading, target_heading);

        if turn_angle != 0.0 {
            instructions.push(Instruction::Turn { angle: turn_angle });
            current_heading = target_heading;
        }

        let move_distance = distance(current_position, target);
        if move_distance > 0.0 {
            instructions.push(Instruction::Forward {
                distance: move_distance,
            });
            current_position = target;
        }

        log::debug!(
            "Planned route to ({}, {}): heading {}, distance {}",
            target.x,
            target.y,
            target_heading,
            move_distance
        );
    }

    instructions
}

/// Drives the turtle through a set of instructions, such as those produced by [`find_path`].
pub fn follow_path(turtle: &mut impl Turtle, instructions: &[Instruction]) {
    for instruction in instructions {
        match instruction {
            Instruction::Turn { angle } => turtle.turn(*angle),
            Instruction::Forward { distance } => turtle.forward(*distance),
        }
    }
}
