use std::path::PathBuf;

use anyhow::{Context, Result};

mod arguments;
mod config;
use config::Config;
mod drawing;
mod geometry;
mod html_generation;
mod path_planning;
mod turtle;
mod viewer;

use crate::{
    arguments::{DrawCommand, PlanCommand, Shape},
    geometry::Point,
    turtle::{SimpleTurtle, Turtle},
};

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .expect("Failed to initialize logger.");

    if let Err(error) = trampoline() {
        log::error!("Fatal error: {:?}", error);
        std::process::exit(1);
    }
}

fn trampoline() -> Result<()> {
    let arguments: arguments::Arguments = argh::from_env();

    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => {
            log::warn!(
                "Failed to read config file at {}: {:?}",
                Config::get_path()
                    .map(|path| path.to_string_lossy().to_string())
                    .unwrap_or(String::from("'unavailable'")),
                error
            );
            config::Config::default()
        }
    };

    match arguments.into_command() {
        arguments::CommandEnum::Draw(draw_configuration) => draw(draw_configuration, config),
        arguments::CommandEnum::Plan(plan_configuration) => plan(plan_configuration, config),
    }
}

fn draw(draw_configuration: DrawCommand, config: Config) -> Result<()> {
    let mut turtle = SimpleTurtle::new();
    turtle.color(draw_configuration.color);

    let shape = draw_configuration.shape;
    if matches!(shape, Shape::Square | Shape::All) {
        log::info!("Draw square with sides of {}", draw_configuration.size);
        drawing::draw_square(&mut turtle, draw_configuration.size);
    }

    if matches!(shape, Shape::Circle | Shape::All) {
        log::info!(
            "Draw circle of diameter {} from {} sides",
            draw_configuration.size,
            draw_configuration.sides
        );
        drawing::draw_approximate_circle(
            &mut turtle,
            draw_configuration.size / 2.0,
            draw_configuration.sides,
        )
        .context("Failed to draw circle.")?;
    }

    if matches!(shape, Shape::Art | Shape::All) {
        log::info!("Draw personal art");
        drawing::draw_personal_art(&mut turtle);
    }

    export(
        &turtle,
        draw_configuration.output,
        !draw_configuration.no_open,
        &config,
    )
}

fn plan(plan_configuration: PlanCommand, config: Config) -> Result<()> {
    let mut turtle = SimpleTurtle::new();

    let points: Vec<Point> = plan_configuration
        .points
        .iter()
        .map(|point| point.0)
        .collect();
    let instructions = path_planning::find_path(&turtle, &points);

    log::info!(
        "Visiting {} points takes {} instructions",
        points.len(),
        instructions.len()
    );
    for instruction in instructions.iter() {
        println!("{}", instruction);
    }

    if plan_configuration.draw {
        path_planning::follow_path(&mut turtle, &instructions);
        export(
            &turtle,
            plan_configuration.output,
            !plan_configuration.no_open,
            &config,
        )?;
    }

    Ok(())
}

fn export(
    turtle: &SimpleTurtle,
    output: Option<PathBuf>,
    open_viewer: bool,
    config: &Config,
) -> Result<()> {
    let output_file = output
        .or_else(|| config.output_file.clone().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(html_generation::DEFAULT_OUTPUT_FILE));

    let html_content = html_generation::generate_html(turtle.path(), &config.canvas)
        .context("Failed to generate HTML drawing.")?;
    html_generation::save_to_file(&html_content, &output_file)?;

    if open_viewer && config.open_viewer {
        viewer::open_in_viewer(&output_file);
    }

    Ok(())
}
