use std::fmt;

/// Errors raised while preparing an arrangement.
///
/// Failures of individual OS calls are not represented here; those are
/// logged and replaced by defaults so the remaining windows still get placed.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrangeError {
    /// Not enough command line arguments
    Usage { program: String },
    /// Instance ratio that is not a positive decimal number
    InvalidRatio(String),
    /// Title pattern that cannot be translated or compiled
    InvalidPattern { pattern: String, reason: String },
    /// Grid with a zero dimension handed to the placer
    InvalidGrid { cols: usize, rows: usize },
    /// Desktop reported a resolution that cannot be tiled
    InvalidScreen { width: i32, height: i32 },
    /// Window arrangement is only available on Windows
    UnsupportedPlatform,
}

impl fmt::Display for ArrangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrangeError::Usage { program } => write!(f, "{}", usage_text(program)),
            ArrangeError::InvalidRatio(raw) => {
                write!(f, "Invalid instance ratio '{}': expected a positive number", raw)
            }
            ArrangeError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid title pattern '{}': {}", pattern, reason)
            }
            ArrangeError::InvalidGrid { cols, rows } => {
                write!(f, "Invalid grid {}x{}: both dimensions must be positive", cols, rows)
            }
            ArrangeError::InvalidScreen { width, height } => {
                write!(f, "Invalid desktop resolution {}x{}", width, height)
            }
            ArrangeError::UnsupportedPlatform => {
                write!(f, "Window arrangement requires the Win32 desktop")
            }
        }
    }
}

impl std::error::Error for ArrangeError {}

impl ArrangeError {
    /// Process exit code reported by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ArrangeError::Usage { .. } => -1,
            _ => 1,
        }
    }
}

/// Result type alias for arrangement operations
pub type ArrangeResult<T> = Result<T, ArrangeError>;

/// Usage text printed when the program is started without enough arguments.
pub fn usage_text(program: &str) -> String {
    format!(
        "Usage: {program} <instanceRatio (width/height)> <ProcessRegEx>\n\
         \tExample: {program} 1.33333333333 \"Dolphin.* \\|.*\"\n\
         \tExample: {program} 0.666666667 \".*melonDS .*\"\n\
         \tExample: {program} 1.77777777777 \"yuzu Mainline.*\""
    )
}
