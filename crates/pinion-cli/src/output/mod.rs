//! Terminal output formatting.
//!
//! Consistent formatting across commands: colors, severity markers, and
//! error rendering with suggestions.

pub mod colors;
pub mod errors;

/// Output handler for consistent terminal formatting
pub struct OutputHandler {
    colors: colors::ColorSupport,
}

impl OutputHandler {
    /// Create a new output handler
    pub fn new() -> Self {
        Self {
            colors: colors::ColorSupport::detect(),
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        println!("{}", self.colors.dim(message));
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", self.colors.green("✓"), message);
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", self.colors.yellow("⚠"), message);
    }

    /// Print one indented report line
    pub fn step(&self, message: &str) {
        println!("  {}", message);
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
