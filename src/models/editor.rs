use serde::{Deserialize, Serialize};

/// Form field values, populated from a fetched entry in edit mode.
/// Absent fields come back as empty strings so the form can be filled
/// without special-casing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryForm {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub highlights: String,
    pub photo_links: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Error,
}

/// An inline status message for the editor's message slot. `kind` maps to
/// the `message success` / `message error` style classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Error }
    }
}

/// Delayed full-page navigation the adapter performs after a successful
/// save or delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Redirect {
    pub to: String,
    pub after_ms: u64,
}

/// Initial editor payload. `form` is populated in edit mode when the fetch
/// succeeded; `message` carries the inline error when it did not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorView {
    pub edit_mode: bool,
    pub form: Option<EntryForm>,
    pub message: Option<StatusMessage>,
}

/// Result of a save or delete attempt: a message for the inline slot and,
/// on success, the delayed redirect back to the journals page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOutcome {
    pub message: StatusMessage,
    pub redirect: Option<Redirect>,
}

/// Advisory date-order validation result, fed to the end-date field's
/// native constraint reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateCheck {
    pub ok: bool,
    pub message: Option<String>,
}
