//! Terminal rendering and output formatting utilities

use crate::config::DisplayConfig;
use crate::game_of_life::Grid;
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;
use tracing::warn;

/// Consumer of one grid snapshot per animation tick
pub trait FrameRenderer {
    fn render(&mut self, step: usize, grid: &Grid) -> Result<()>;
}

impl<F> FrameRenderer for F
where
    F: FnMut(usize, &Grid) -> Result<()>,
{
    fn render(&mut self, step: usize, grid: &Grid) -> Result<()> {
        self(step, grid)
    }
}

/// Glyphs and tint derived from a colourmap name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub alive: char,
    pub dead: char,
    pub color: Option<Color>,
}

impl Palette {
    pub fn from_colourmap(name: &str) -> Self {
        let color = match name.to_ascii_lowercase().as_str() {
            "binary" | "bone" => None,
            "blues" | "pubu" | "bugn" => Some(Color::Blue),
            "summer" | "greens" => Some(Color::Green),
            "spring" | "purples" | "purd" => Some(Color::Magenta),
            "autumn" | "orrd" | "accent" => Some(Color::Yellow),
            "set2" | "set3" | "pastel1" | "pastel2" | "brbg" | "puor" => Some(Color::Cyan),
            other => {
                warn!("Unknown colourmap '{}', falling back to binary", other);
                None
            }
        };
        Self {
            alive: '█',
            dead: '·',
            color,
        }
    }
}

/// Draws each frame to a writer, then waits for the refresh interval
pub struct TerminalRenderer<W: Write> {
    out: W,
    palette: Palette,
    interval: Duration,
    clear_screen: bool,
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout(display: &DisplayConfig) -> Self {
        Self::new(std::io::stdout(), display)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, display: &DisplayConfig) -> Self {
        Self {
            out,
            palette: Palette::from_colourmap(&display.colourmap),
            interval: Duration::from_millis(display.refresh_interval_ms),
            clear_screen: true,
        }
    }

    /// Disable screen clearing and frame pacing (for logs and tests)
    pub fn plain(mut self) -> Self {
        self.clear_screen = false;
        self.interval = Duration::ZERO;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameRenderer for TerminalRenderer<W> {
    fn render(&mut self, step: usize, grid: &Grid) -> Result<()> {
        let mut frame = String::new();
        if self.clear_screen {
            frame.push_str("\x1b[2J\x1b[H");
        }
        frame.push_str(&format!("Step {}\n", step));

        let body = GridFormatter::format_grid_with(grid, self.palette.alive, self.palette.dead);
        match self.palette.color {
            Some(color) => frame.push_str(&ColorOutput::colored(&body, color)),
            None => frame.push_str(&body),
        }

        self.out.write_all(frame.as_bytes()).context("Failed to write frame")?;
        self.out.flush().context("Failed to flush frame")?;

        if !self.interval.is_zero() {
            std::thread::sleep(self.interval);
        }
        Ok(())
    }
}

/// Text layouts for grids
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        Self::format_grid_with(grid, '█', '·')
    }

    pub fn format_grid_with(grid: &Grid, alive: char, dead: char) -> String {
        let mut output = String::with_capacity(grid.rows * (grid.cols + 1) * alive.len_utf8());
        for row in 0..grid.rows {
            for col in 0..grid.cols {
                output.push(if grid.get(row, col) { alive } else { dead });
            }
            output.push('\n');
        }
        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoundaryCondition;

    fn checker() -> Grid {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        Grid::from_cells(cells, BoundaryCondition::Dead).unwrap()
    }

    #[test]
    fn test_grid_formatting() {
        let grid = checker();

        let compact = GridFormatter::format_grid_compact(&grid);
        assert_eq!(compact, "█·█\n·█·\n█·█\n");
    }

    #[test]
    fn test_terminal_renderer_frame() {
        let display = DisplayConfig {
            refresh_interval_ms: 500,
            colourmap: "binary".to_string(),
        };
        let mut renderer = TerminalRenderer::new(Vec::new(), &display).plain();
        renderer.render(7, &checker()).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(output, "Step 7\n█·█\n·█·\n█·█\n");
    }

    #[test]
    fn test_palette_lookup() {
        assert_eq!(Palette::from_colourmap("binary").color, None);
        assert_eq!(Palette::from_colourmap("Blues").color, Some(Color::Blue));
        assert_eq!(Palette::from_colourmap("Set3").color, Some(Color::Cyan));
        assert_eq!(Palette::from_colourmap("no-such-map").color, None);
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
