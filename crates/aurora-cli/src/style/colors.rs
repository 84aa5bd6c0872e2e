//! Semantic color palette for terminal output.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream, Style};

fn success_style() -> Style {
    Style::new().green().bold()
}

fn error_style() -> Style {
    Style::new().red().bold()
}

fn muted_style() -> Style {
    Style::new().dimmed()
}

fn header_style() -> Style {
    Style::new().bold()
}

/// Trait extension to apply semantic styles.
pub trait SemanticStyle: Sized {
    /// Green bold.
    fn success(&self) -> String;
    /// Red bold.
    fn error(&self) -> String;
    /// Dimmed.
    fn muted(&self) -> String;
    /// Bold.
    fn header(&self) -> String;
}

/// Styles `value` only when `--no-color` is off and `stream` supports color.
///
/// Pipes, `NO_COLOR` and dumb terminals come out plain.
fn styled<T: Display>(value: &T, style: Style, stream: Stream) -> String {
    if super::no_color() {
        value.to_string()
    } else {
        value
            .if_supports_color(stream, |v| v.style(style))
            .to_string()
    }
}

impl<T: Display> SemanticStyle for T {
    fn success(&self) -> String {
        styled(self, success_style(), Stream::Stdout)
    }

    fn error(&self) -> String {
        styled(self, error_style(), Stream::Stdout)
    }

    fn muted(&self) -> String {
        styled(self, muted_style(), Stream::Stdout)
    }

    fn header(&self) -> String {
        styled(self, header_style(), Stream::Stdout)
    }
}

/// [`SemanticStyle::error`] for text written to stderr.
pub fn stderr_error<T: Display>(value: &T) -> String {
    styled(value, error_style(), Stream::Stderr)
}
