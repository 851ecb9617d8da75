//! Output configuration types

const DEFAULT_SUMMARY_WIDTH: usize = 60;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Show a short summary of each module's value next to its name
    pub show_values: bool,
    /// Truncate value summaries to this many characters (None = no limit)
    pub summary_width: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            show_values: true,
            summary_width: Some(DEFAULT_SUMMARY_WIDTH),
        }
    }
}
