//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI: result tables, the strategy list
//! and the progress spinner.

use std::io::{self, Write};

use terminal_size::{terminal_size_of, Height, Width};

use super::bench::AveragedResult;
use super::timer::unit_name;
use crate::registry::StrategyRegistry;

/// Column headings of the result table.
fn headings() -> [String; 3] {
    [
        "Size".to_string(),
        format!("Time ({})", unit_name()),
        "Time (ms)".to_string(),
    ]
}

/// Format an integer with `,` thousands separators.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a non-negative value with one decimal place and thousands separators.
pub fn format_decimal(value: f64) -> String {
    let tenths = (value * 10.0).round().max(0.0) as u64;
    format!("{}.{}", format_thousands(tenths / 10), tenths % 10)
}

/// Formatted cells of one table row.
fn format_row(result: &AveragedResult) -> [String; 3] {
    [
        format_thousands(result.size() as u64),
        format_thousands(result.elapsed_ticks().round() as u64),
        format_decimal(result.elapsed_ms()),
    ]
}

/// Render the results as a framed table followed by a blank line.
///
/// ```text
/// +------+--------------+-----------+
/// | Size | Time (ticks) | Time (ms) |
/// +------+--------------+-----------+
/// |   10 |        1,250 |       0.0 |
/// +------+--------------+-----------+
/// ```
pub fn render(results: &[AveragedResult]) -> String {
    let headings = headings();
    let rows: Vec<[String; 3]> = results.iter().map(format_row).collect();

    let mut widths = headings.clone().map(|h| h.len());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let hrule = format!(
        "+{}+",
        widths
            .iter()
            .map(|&w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );
    let line = |cells: &[String; 3]| {
        format!(
            "| {:>w0$} | {:>w1$} | {:>w2$} |",
            cells[0],
            cells[1],
            cells[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        )
    };

    let mut out = String::new();
    out.push_str(&hrule);
    out.push('\n');
    out.push_str(&line(&headings));
    out.push('\n');
    out.push_str(&hrule);
    out.push('\n');
    for row in &rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out.push_str(&hrule);
    out.push('\n');
    out.push('\n');
    out
}

/// Print the list of available strategies
pub fn print_available_strategies(registry: &StrategyRegistry) {
    println!("Available strategies:");
    println!();
    for variant in registry.all() {
        println!("  {:<18} - {}", variant.name(), variant.description);
    }
}

/// Whether stdout is attached to a terminal wide enough to draw on.
///
/// Only stdout counts: a terminal on stderr or stdin does not make a
/// redirected report interactive.
pub fn is_interactive() -> bool {
    is_terminal_handle(io::stdout())
}

/// Whether `handle` refers to a terminal with a usable width.
#[cfg(unix)]
pub fn is_terminal_handle<H: std::os::fd::AsFd>(handle: H) -> bool {
    has_width(terminal_size_of(handle))
}

#[cfg(windows)]
pub fn is_terminal_handle<H: std::os::windows::io::AsHandle>(handle: H) -> bool {
    has_width(terminal_size_of(handle))
}

fn has_width(size: Option<(Width, Height)>) -> bool {
    matches!(size, Some((Width(w), _)) if w > 0)
}

/// Activity indicator shown while a strategy's trials run.
pub trait Progress {
    fn start_progress(&mut self, label: &str) -> io::Result<()>;
    fn step_progress(&mut self) -> io::Result<()>;
    fn stop_progress(&mut self) -> io::Result<()>;
}

/// Shows nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuietProgress;

impl Progress for QuietProgress {
    fn start_progress(&mut self, _label: &str) -> io::Result<()> {
        Ok(())
    }

    fn step_progress(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn stop_progress(&mut self) -> io::Result<()> {
        Ok(())
    }
}

const BATON: [char; 4] = ['/', '-', '\\', '|'];
const BACKSPACE: char = '\u{8}';

/// Spinning baton drawn in place with backspaces.
#[derive(Debug)]
pub struct SpinnerProgress<W: Write> {
    out: W,
    step: usize,
    running: bool,
}

impl<W: Write> SpinnerProgress<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            step: 0,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl SpinnerProgress<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Progress for SpinnerProgress<W> {
    fn start_progress(&mut self, _label: &str) -> io::Result<()> {
        if self.running {
            self.stop_progress()?;
        }
        self.step = 0;
        self.running = true;
        write!(self.out, "{}", BATON[self.step])?;
        self.out.flush()
    }

    fn step_progress(&mut self) -> io::Result<()> {
        if !self.running {
            return Ok(());
        }
        self.step = (self.step + 1) % BATON.len();
        write!(self.out, "{}{}", BACKSPACE, BATON[self.step])?;
        self.out.flush()
    }

    fn stop_progress(&mut self) -> io::Result<()> {
        if !self.running {
            return Ok(());
        }
        self.running = false;
        // Blank out the glyph and leave the cursor where it started.
        write!(self.out, "{} {}", BACKSPACE, BACKSPACE)?;
        self.out.flush()
    }
}
