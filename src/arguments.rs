use std::{path::PathBuf, str::FromStr};

use argh::FromArgs;
use thiserror::Error;

use crate::{geometry::Point, turtle::Color};

#[derive(FromArgs, PartialEq, Debug)]
/// Draw with a turtle and look at the result in your browser.
pub struct Arguments {
    #[argh(subcommand)]
    pub command: Option<CommandEnum>,
}

impl Arguments {
    /// The subcommand to run. Without one, the whole drawing demonstration runs.
    pub fn into_command(self) -> CommandEnum {
        self.command
            .unwrap_or_else(|| CommandEnum::Draw(DrawCommand::default()))
    }
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub enum CommandEnum {
    Draw(DrawCommand),
    Plan(PlanCommand),
}

#[derive(FromArgs, PartialEq, Debug)]
/// Run the drawing demonstration and export it as HTML.
#[argh(subcommand, name = "draw")]
pub struct DrawCommand {
    #[argh(option, default = "Shape::All")]
    /// what to draw: square, circle, art or all.
    pub shape: Shape,

    #[argh(option, default = "100.0")]
    /// side length of the square, and diameter of the circle.
    pub size: f64,

    #[argh(option, default = "360")]
    /// number of sides used to approximate the circle.
    pub sides: i32,

    #[argh(option, default = "Color::Black")]
    /// pen color for the square and circle.
    pub color: Color,

    #[argh(option)]
    /// path of the HTML file to write.
    pub output: Option<PathBuf>,

    #[argh(switch)]
    /// don't try to open the result in a viewer.
    pub no_open: bool,
}

impl Default for DrawCommand {
    fn default() -> Self {
        Self {
            shape: Shape::All,
            size: 100.0,
            sides: 360,
            color: Color::Black,
            output: None,
            no_open: false,
        }
    }
}

#[derive(FromArgs, PartialEq, Debug)]
/// Print the turns and moves that visit a list of points, given as x,y.
#[argh(subcommand, name = "plan")]
pub struct PlanCommand {
    #[argh(positional)]
    /// points to visit, in order.
    pub points: Vec<PointArgument>,

    #[argh(switch)]
    /// also walk the planned route and export it as HTML.
    pub draw: bool,

    #[argh(option)]
    /// path of the HTML file to write.
    pub output: Option<PathBuf>,

    #[argh(switch)]
    /// don't try to open the result in a viewer.
    pub no_open: bool,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Shape {
    Square,
    Circle,
    Art,
    All,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown shape {0}, expected square, circle, art or all")]
pub struct UnknownShape(String);

impl FromStr for Shape {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(Shape::Square),
            "circle" => Ok(Shape::Circle),
            "art" => Ok(Shape::Art),
            "all" => Ok(Shape::All),
            _ => Err(UnknownShape(s.to_string())),
        }
    }
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct PointArgument(pub Point);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointParseError {
    #[error("Expected a point as x,y but got {0}")]
    Format(String),
    #[error("Invalid coordinate {0}")]
    Coordinate(String),
}

impl FromStr for PointArgument {
    type Err = PointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| PointParseError::Format(s.to_string()))?;

        let parse_coordinate = |coordinate: &str| {
            coordinate
                .trim()
                .parse::<f64>()
                .map_err(|_| PointParseError::Coordinate(coordinate.to_string()))
        };

        Ok(PointArgument(Point::new(
            parse_coordinate(x)?,
            parse_coordinate(y)?,
        )))
    }
}
