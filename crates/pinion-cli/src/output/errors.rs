//! Error message formatting with actionable suggestions.

use super::colors::ColorSupport;
use pinion_core::PinionError;
use std::error::Error;

/// Error formatter with suggestions
pub struct ErrorFormatter {
    colors: ColorSupport,
}

impl ErrorFormatter {
    /// Create a new error formatter
    pub fn new() -> Self {
        Self {
            colors: ColorSupport::detect(),
        }
    }

    /// Format an error with its suggestion and source chain
    pub fn format_error(&self, error: &PinionError) -> String {
        let mut output = String::new();

        output.push_str(&self.colors.red("error"));
        output.push_str(": ");
        output.push_str(&error.to_string());
        output.push('\n');

        if let Some(suggestion) = error.suggestion() {
            output.push_str(&self.colors.dim("help"));
            output.push_str(": ");
            output.push_str(suggestion);
            output.push('\n');
        }

        let mut source = error.source();
        while let Some(err) = source {
            output.push_str(&self.colors.dim("caused by"));
            output.push_str(": ");
            output.push_str(&err.to_string());
            output.push('\n');
            source = err.source();
        }

        output
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_formatter() -> ErrorFormatter {
        ErrorFormatter {
            colors: ColorSupport::disabled(),
        }
    }

    #[test]
    fn test_format_includes_help_line() {
        let err = PinionError::CircularDependency {
            cycle: "a -> b -> a".to_string(),
        };
        let rendered = plain_formatter().format_error(&err);

        assert!(rendered.starts_with("error: "));
        assert!(rendered.contains("a -> b -> a"));
        assert!(rendered.contains("help: "));
    }

    #[test]
    fn test_format_includes_source_chain() {
        let err = PinionError::io(
            "read failed".to_string(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let rendered = plain_formatter().format_error(&err);

        assert!(rendered.contains("caused by: no such file"));
    }
}
