/// Clipboard sink abstraction and the timed copy acknowledgment
pub mod clipboard;
/// Formatting of generated teams as a name list
pub mod names;

pub use clipboard::{ClipboardSink, CopyFeedback, SystemClipboard, WriteMode};
pub use names::format_team_names;
