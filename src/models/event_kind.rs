use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventKind {
    Entry,
    Exit,
}

impl EventKind {
    /// Match a raw marker cell against the configured ENTRY/EXIT markers.
    /// Comparison is case-insensitive; surrounding whitespace is ignored.
    pub fn from_marker(raw: &str, entry_marker: &str, exit_marker: &str) -> Option<Self> {
        let value = raw.trim();
        if value.eq_ignore_ascii_case(entry_marker) {
            Some(Self::Entry)
        } else if value.eq_ignore_ascii_case(exit_marker) {
            Some(Self::Exit)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Entry => "entry",
            EventKind::Exit => "exit",
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, EventKind::Entry)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, EventKind::Exit)
    }
}
