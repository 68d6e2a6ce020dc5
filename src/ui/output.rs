//! Output mode and writer.

use console::style;
use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including per-kind detail.
    Verbose,
    /// Show summaries and status.
    #[default]
    Normal,
    /// Show nothing except errors.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows per-kind detail lines.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

/// Output writer that respects output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write a status line.
    pub fn println(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write a detail line (verbose only).
    pub fn detail(&self, msg: &str) {
        if self.mode.shows_detail() {
            println!("  {}", style(msg).dim());
        }
    }

    /// Write a success line.
    pub fn success(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    /// Write a warning line.
    pub fn warning(&self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{} {}", style("!").yellow(), msg);
        }
    }

    /// Write an error line. Always shown.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("✗").red(), msg);
    }
}
