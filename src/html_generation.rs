//! Turns a turtle's trail into an HTML page with an inline SVG drawing.

use std::{fmt::Write, fs, path::Path};

use anyhow::{Context, Result};

use crate::{config::canvas::CanvasConfig, turtle::Segment};

pub const DEFAULT_OUTPUT_FILE: &str = "output.html";

pub fn generate_html(path: &[Segment], canvas: &CanvasConfig) -> Result<String> {
    let (offset_x, offset_y) = canvas.origin();
    let scale = canvas.scale;

    let mut lines = String::default();
    for segment in path.iter() {
        let x1 = segment.start.x * scale + offset_x;
        let y1 = segment.start.y * scale + offset_y;
        let x2 = segment.end.x * scale + offset_x;
        let y2 = segment.end.y * scale + offset_y;

        writeln!(
            &mut lines,
            r#"        <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            x1,
            y1,
            x2,
            y2,
            segment.color.svg_name(),
            canvas.stroke_width
        )?;
    }

    let mut output = String::default();
    write!(
        &mut output,
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Turtle Graphics Output</title>
    <style>
        body {{ margin: 0; }}
        canvas {{ display: block; }}
    </style>
</head>
<body>
    <svg width="{}" height="{}" style="background-color:{};">
{}    </svg>
</body>
</html>
"#,
        canvas.width, canvas.height, canvas.background, lines
    )?;

    Ok(output)
}

pub fn save_to_file(html_content: &str, path: &Path) -> Result<()> {
    fs::write(path, html_content)
        .with_context(|| format!("Failed to save drawing to {}.", path.display()))?;
    log::info!("Drawing saved to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::Point,
        turtle::{Color, SimpleTurtle, Turtle},
    };

    fn line_elements(html: &str) -> Vec<&str> {
        html.lines()
            .map(str::trim)
            .filter(|line| line.starts_with("<line"))
            .collect()
    }

    #[test]
    fn empty_path_is_blank_canvas() {
        let html = generate_html(&[], &CanvasConfig::default()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Turtle Graphics Output</title>"));
        assert!(html.contains(r#"<svg width="500" height="500" style="background-color:#f0f0f0;">"#));
        assert!(line_elements(&html).is_empty());
    }

    #[test]
    fn one_line_per_segment() {
        let mut turtle = SimpleTurtle::new();
        turtle.forward(10.0);
        turtle.pen_up();
        turtle.forward(10.0);
        turtle.pen_down();
        turtle.color(Color::Red);
        turtle.turn(90.0);
        turtle.forward(10.0);

        let html = generate_html(turtle.path(), &CanvasConfig::default()).unwrap();
        let lines = line_elements(&html);

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"<line x1="250" y1="250" x2="260" y2="250" stroke="black" stroke-width="2"/>"#
        );
        assert!(lines[1].starts_with(r#"<line x1="270" y1="250" x2="270""#));
        assert!(lines[1].contains(r#"stroke="red""#));
    }

    #[test]
    fn canvas_settings_are_applied() {
        let canvas = CanvasConfig {
            width: 200.0,
            height: 100.0,
            scale: 2.0,
            stroke_width: 0.5,
            background: String::from("white"),
        };
        let path = [Segment {
            start: Point::new(-10.0, 5.0),
            end: Point::new(0.0, 0.0),
            color: Color::Green,
        }];

        let html = generate_html(&path, &canvas).unwrap();

        assert!(html.contains(r#"<svg width="200" height="100" style="background-color:white;">"#));
        assert_eq!(
            line_elements(&html),
            vec![r#"<line x1="80" y1="60" x2="100" y2="50" stroke="green" stroke-width="0.5"/>"#]
        );
    }

    #[test]
    fn saves_to_disk() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join(DEFAULT_OUTPUT_FILE);

        save_to_file("<html></html>", &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn save_failure_is_reported() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("missing").join(DEFAULT_OUTPUT_FILE);

        assert!(save_to_file("<html></html>", &path).is_err());
    }
}
