//! Small enums and command types for the app session.

/// Which backend operation a drop zone triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOperation {
    /// Initialize the manager in the dropped files.
    Initialize,
    /// Fix the dropped files for release.
    Fix,
}

impl DropOperation {
    /// Lowercase name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            DropOperation::Initialize => "initialize",
            DropOperation::Fix => "fix",
        }
    }
}

/// A drop accepted by an operation zone, queued for the app loop.
///
/// Zone callbacks run inside registry dispatch, so they only enqueue; the
/// loop picks the command up in a later turn and does the actual work
/// (divider, visibility, backend hand-off).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ZoneDrop {
    pub op: DropOperation,
    pub paths: Vec<String>,
}
