//! Data models shared between the host shell, the backend, and the UI core.
//!
//! These mirror the wire shapes the backend emits on the result stream:
//! a [`Message`] per processed file, carrying a list of [`Note`]s, plus the
//! persisted [`AppConfig`]. All of them are immutable once received.

use serde::{Deserialize, Serialize};

/// Severity/variant tag attached to a diagnostic note.
///
/// A small fixed enumeration; anything the backend sends outside of it is
/// preserved as [`Variant::Other`] so the note still renders, it just never
/// contributes severity styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Info,
    Warning,
    Success,
    Danger,
    /// Unrecognized variant tag, kept verbatim.
    #[serde(untagged)]
    Other(String),
}

impl Variant {
    /// The tag as it appears on the wire (and in icon lookups).
    pub fn as_str(&self) -> &str {
        match self {
            Variant::Info => "info",
            Variant::Warning => "warning",
            Variant::Success => "success",
            Variant::Danger => "danger",
            Variant::Other(tag) => tag,
        }
    }
}

/// A single diagnostic note inside a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Severity tag, drives icon choice and message styling
    pub variant: Variant,
    /// Display text (pre-rendered markup)
    pub text: String,
    /// Optional expandable detail block (raw text, shown in a code view)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Note {
    /// Create a note with no details.
    pub fn new(variant: Variant, text: impl Into<String>) -> Self {
        Self {
            variant,
            text: text.into(),
            details: None,
        }
    }

    /// Attach an expandable detail block.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// One result message from the backend stream.
///
/// The title is usually an absolute path; the render layer shows only the
/// final segment and keeps the full title as a tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Icon tag, rendered when the render layer knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Message title, often a file path
    pub title: String,
    /// Diagnostic notes, in the order the backend produced them
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Message {
    /// Create a message with no icon and no notes.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            icon: None,
            title: title.into(),
            notes: Vec::new(),
        }
    }

    /// Set the icon tag.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Append a note.
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// The last path segment of the title, for compact display.
    pub fn short_title(&self) -> &str {
        self.title.rsplit('/').next().unwrap_or(&self.title)
    }
}

/// Persisted display preferences.
///
/// Serialized as the host shell stores it on disk (`{"onTop": bool}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Keep the utility window above other windows
    #[serde(rename = "onTop", default)]
    pub on_top: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_roundtrip() {
        let json = serde_json::to_string(&Variant::Danger).unwrap();
        assert_eq!(json, "\"danger\"");
        let back: Variant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Variant::Danger);
    }

    #[test]
    fn test_variant_unrecognized_preserved() {
        let v: Variant = serde_json::from_str("\"notice\"").unwrap();
        assert_eq!(v, Variant::Other("notice".to_string()));
        assert_eq!(v.as_str(), "notice");
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"notice\"");
    }

    #[test]
    fn test_note_deserializes_without_details() {
        let note: Note = serde_json::from_str(r#"{"variant":"info","text":"hi"}"#).unwrap();
        assert_eq!(note.variant, Variant::Info);
        assert_eq!(note.text, "hi");
        assert!(note.details.is_none());
    }

    #[test]
    fn test_note_details_omitted_when_absent() {
        let json = serde_json::to_string(&Note::new(Variant::Info, "hi")).unwrap();
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_message_wire_shape() {
        let json = r#"{"icon":"file","title":"/a/b/c.vaj","notes":[{"variant":"success","text":"File saved.","details":"{}"}]}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.icon.as_deref(), Some("file"));
        assert_eq!(msg.title, "/a/b/c.vaj");
        assert_eq!(msg.notes.len(), 1);
        assert_eq!(msg.notes[0].details.as_deref(), Some("{}"));
    }

    #[test]
    fn test_message_notes_default_empty() {
        let msg: Message = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert!(msg.notes.is_empty());
        assert!(msg.icon.is_none());
    }

    #[test]
    fn test_short_title() {
        assert_eq!(Message::new("/home/u/pkg/item.vaj").short_title(), "item.vaj");
        assert_eq!(Message::new("item.vaj").short_title(), "item.vaj");
        assert_eq!(Message::new("").short_title(), "");
    }

    #[test]
    fn test_app_config_wire_name() {
        let json = serde_json::to_string(&AppConfig { on_top: true }).unwrap();
        assert_eq!(json, r#"{"onTop":true}"#);
        let cfg: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(!cfg.on_top);
    }
}
