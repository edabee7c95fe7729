use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A collection of icons used throughout the terminal UI.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    /// A check mark symbol (✓).
    Check,
    /// A cross mark symbol (✗).
    Cross,
    /// A closed folder disclosure marker (▸).
    FolderClosed,
    /// An open folder disclosure marker (▾).
    FolderOpen,
    /// A spinner symbol frame.
    Spinner(usize),
}

impl Icon {
    /// Returns a `Spinner` icon with the frame index calculated based on
    /// current time.
    pub fn current_spinner() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        Icon::Spinner((now / 100) as usize)
    }

    /// Returns the string representation of the icon.
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Check => "✓",
            Icon::Cross => "✗",
            Icon::FolderClosed => "▸",
            Icon::FolderOpen => "▾",
            Icon::Spinner(frame) => SPINNER_FRAMES[frame % SPINNER_FRAMES.len()],
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the decorative glyph for a file name's extension, when one is
/// mapped. Unknown and missing extensions have no glyph.
pub fn file_glyph(file_name: &str) -> Option<&'static str> {
    let (_, extension) = file_name.rsplit_once('.')?;
    match extension.to_ascii_lowercase().as_str() {
        "rs" => Some("⚙"),
        "ts" => Some("🔷"),
        "tsx" | "jsx" => Some("⚛"),
        "js" => Some("🟨"),
        "py" => Some("🐍"),
        "json" => Some("📋"),
        "md" => Some("📝"),
        "css" => Some("🎨"),
        "html" => Some("🌐"),
        "yml" | "yaml" => Some("⚙"),
        _ => None,
    }
}
