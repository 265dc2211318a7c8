//! Terminal color utilities using ANSI escape codes.
//!
//! Colors are only applied through a [`Palette`], so callers decide once
//! whether output is colored and the rendering code stays the same.

use std::io::IsTerminal;

/// ANSI color codes
pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

use codes::*;

/// When to emit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorChoice {
    /// Parse a color choice from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }

    /// Resolve `Auto` against whether stdout is a terminal.
    pub fn enabled(&self) -> bool {
        match self {
            Self::Auto => std::io::stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Applies (or skips) color to report fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A palette that never colors.
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, codes: &[&str], text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("{}{}{}", codes.concat(), text, RESET)
    }

    /// Color a label (bold).
    pub fn label(&self, text: &str) -> String {
        self.paint(&[BOLD], text)
    }

    /// Color a number/count (bright cyan).
    pub fn number(&self, n: impl std::fmt::Display) -> String {
        self.paint(&[BRIGHT_CYAN], &n.to_string())
    }

    /// Color a task name (cyan).
    pub fn task(&self, text: &str) -> String {
        self.paint(&[CYAN], text)
    }

    /// Color success messages (green).
    pub fn success(&self, text: &str) -> String {
        self.paint(&[GREEN], text)
    }

    /// Color warning messages (yellow).
    pub fn warning(&self, text: &str) -> String {
        self.paint(&[YELLOW], text)
    }
}
