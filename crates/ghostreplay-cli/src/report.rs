use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Output sink for user-facing progress and result lines.
///
/// Handlers report through this seam instead of printing directly, so the
/// console stays swappable in tests and alternative hosts.
pub trait Reporter {
    /// A step started or an intermediate fact worth showing
    fn info(&self, message: &str);

    /// An operation completed
    fn success(&self, message: &str);

    /// A non-fatal problem worth flagging (fatal ones surface as errors)
    fn failure(&self, message: &str);
}

/// Console reporter with color when stdout is a terminal.
pub struct ConsoleReporter {
    colored: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            colored: std::io::stdout().is_terminal(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        if self.colored {
            println!("{}", message.blue());
        } else {
            println!("{}", message);
        }
    }

    fn success(&self, message: &str) {
        if self.colored {
            println!("{}", message.green());
        } else {
            println!("{}", message);
        }
    }

    fn failure(&self, message: &str) {
        if self.colored {
            eprintln!("{}", message.red());
        } else {
            eprintln!("{}", message);
        }
    }
}
