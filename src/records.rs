use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// One customer feedback row as the backend returns it. Field names on the
/// wire are PascalCase; `Feedback`, `Sentiment` and `Gender` may be null or
/// absent until the corresponding analysis has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    #[serde(rename = "ID", deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "Feedback")]
    pub feedback: Option<String>,
    #[serde(rename = "Sentiment")]
    pub sentiment: Option<String>,
    #[serde(rename = "Gender")]
    pub gender: Option<String>,
}

// The backend stores IDs as numbers in some deployments and strings in
// others. Accept both and normalize to a string, which is what checkbox
// values and the Id query parameter need anyway.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "record ID must be a string or number, got {}",
            other
        ))),
    }
}

/// Parse the raw body of `getallcontents`. A malformed or empty payload is
/// not an error the panel can do anything about, so it degrades to "no
/// records" and the page renders an empty table.
pub fn parse_feedback_payload(body: &str) -> Vec<FeedbackRecord> {
    if body.trim().is_empty() {
        warn!("Feedback payload is empty - likely no feedback has been stored yet");
        return Vec::new();
    }

    match serde_json::from_str::<Vec<FeedbackRecord>>(body) {
        Ok(records) => records,
        Err(e) => {
            warn!("Failed to parse feedback payload, rendering an empty table: {}", e);
            Vec::new()
        }
    }
}

/// The set of checked row IDs, kept in the order the user's rows appear and
/// with duplicates dropped.
#[derive(Debug, Default, Clone)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ID. Blank values and repeats are ignored.
    pub fn insert(&mut self, id: impl Into<String>) {
        let id = id.into().trim().to_string();
        if id.is_empty() || self.ids.contains(&id) {
            return;
        }
        self.ids.push(id);
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Comma-separated value for the `Id` query parameter. No trailing
    /// comma; empty selection yields an empty string.
    pub fn to_query_value(&self) -> String {
        self.ids.join(",")
    }
}

impl FromIterator<String> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = SelectionSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// A new feedback entry as typed into the entry form. Validated before any
/// request is built from it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedbackSubmission {
    #[validate(custom = "not_blank", length(max = 64))]
    pub first_name: String,
    #[validate(custom = "not_blank", length(max = 64))]
    pub last_name: String,
    #[validate(custom = "not_blank", length(max = 2000))]
    pub feedback: String,
}
