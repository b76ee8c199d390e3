use crate::io::configuration::COPY_FEEDBACK_MS;
use crate::io::error::{Result, RollError, clipboard_error};
use arboard::Clipboard;
use std::time::{Duration, Instant};

/// External text sink that exported team names are written to
pub trait ClipboardSink {
    /// Test whether the sink can be written at all
    fn is_available(&self) -> bool;

    /// Replace the sink contents with `text`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// How a system clipboard write hands over the copied text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Return as soon as the text is set; the owning process stays alive
    #[default]
    Immediate,
    /// Keep serving the text until another program takes the clipboard
    ///
    /// On Linux the clipboard owner serves its contents, so a process about
    /// to exit must wait or the text is lost. Other platforms copy eagerly.
    UntilPasted,
}

/// The desktop clipboard, probed once when created
pub struct SystemClipboard {
    inner: Option<Clipboard>,
    mode: WriteMode,
}

impl SystemClipboard {
    /// Open the system clipboard, remembering whether it is reachable
    pub fn probe(mode: WriteMode) -> Self {
        let inner = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                log::warn!("clipboard unavailable: {err}");
                None
            }
        };
        Self { inner, mode }
    }
}

impl ClipboardSink for SystemClipboard {
    fn is_available(&self) -> bool {
        self.inner.is_some()
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        let mode = self.mode;
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(RollError::Clipboard {
                reason: "clipboard unavailable".to_string(),
            });
        };
        set_text(clipboard, text, mode).map_err(|err| clipboard_error(&err))
    }
}

#[cfg(target_os = "linux")]
fn set_text(
    clipboard: &mut Clipboard,
    text: &str,
    mode: WriteMode,
) -> std::result::Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    match mode {
        WriteMode::Immediate => clipboard.set_text(text),
        WriteMode::UntilPasted => {
            log::info!("holding the clipboard until another program takes it");
            clipboard.set().wait().text(text)
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn set_text(
    clipboard: &mut Clipboard,
    text: &str,
    _mode: WriteMode,
) -> std::result::Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// Short-lived "copied" acknowledgment
///
/// Arming sets a deadline; re-arming replaces it, so the last copy wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyFeedback {
    expires_at: Option<Instant>,
    duration: Duration,
}

impl CopyFeedback {
    /// Feedback lasting the given duration after each copy
    pub const fn new(duration: Duration) -> Self {
        Self {
            expires_at: None,
            duration,
        }
    }

    /// Start or restart the acknowledgment window at `now`
    pub fn arm(&mut self, now: Instant) {
        self.expires_at = now.checked_add(self.duration);
    }

    /// Test whether the acknowledgment is still showing at `now`
    pub fn is_active(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now < deadline)
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(Duration::from_millis(COPY_FEEDBACK_MS))
    }
}
