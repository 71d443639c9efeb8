use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SinEntry {
    pub id: i64,
    pub sin_description: String,
    pub occurrence_date: Option<String>,
    pub confessed: bool,
    pub confession_date: Option<String>, // set iff confessed
    pub notes: Option<String>,
    pub created_at: String,
}

impl SinEntry {
    pub fn status_label(&self) -> &'static str {
        if self.confessed {
            "Confessed"
        } else {
            "Not Confessed"
        }
    }
}

/// Result of an Unconfessed → Confessed transition attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfessOutcome {
    /// Row updated; carries the stored confession date.
    Confessed { date: String },
    /// No entry with that id.
    NotFound,
    /// Entry was already confessed; the original date is untouched.
    AlreadyConfessed { on: Option<String> },
}

impl ConfessOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ConfessOutcome::Confessed { .. })
    }
}
