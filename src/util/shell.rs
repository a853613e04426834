//! Status line output.
//!
//! One right-aligned verb plus the produced artifact per line, written to
//! stderr. This is the tool's only progress reporting and is not meant to be
//! machine-parseable.

use std::fmt::Display;
use std::io::{self, IsTerminal};

/// Status verbs for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Removed,
    Created,
    Copied,
    Packaged,
}

impl Status {
    fn as_str(&self) -> &'static str {
        match self {
            Status::Removed => "Removed",
            Status::Created => "Created",
            Status::Copied => "Copied",
            Status::Packaged => "Packaged",
        }
    }
}

/// Stderr status reporting.
#[derive(Debug, Clone)]
pub struct Shell {
    color: bool,
}

impl Shell {
    /// Create a shell, detecting color support from the terminal unless
    /// explicitly disabled.
    pub fn new(no_color: bool) -> Self {
        Shell {
            color: !no_color && io::stderr().is_terminal(),
        }
    }

    /// Print one status line.
    pub fn status(&self, status: Status, message: impl Display) {
        if self.color {
            // bold green, matching cargo's verb column
            eprintln!("\x1b[1;32m{:>12}\x1b[0m {}", status.as_str(), message);
        } else {
            eprintln!("{:>12} {}", status.as_str(), message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_verbs() {
        assert_eq!(Status::Created.as_str(), "Created");
        assert_eq!(Status::Packaged.as_str(), "Packaged");
    }
}
