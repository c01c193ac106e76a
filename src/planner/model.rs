//! Travel profile and transcript data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::state::Field;

/// A validated answer for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(u32),
    Text(String),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// The traveler's answers, one optional slot per field.
///
/// Slots are indexed by [`Field::index`], so iteration always follows
/// collection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelProfile {
    values: [Option<FieldValue>; 7],
}

impl TravelProfile {
    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.values[field.index()].as_ref()
    }

    pub fn is_set(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Fill a slot. Returns `false` and leaves the slot untouched if it is
    /// already filled.
    pub fn fill(&mut self, field: Field, value: FieldValue) -> bool {
        let slot = &mut self.values[field.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        true
    }

    /// Number of filled slots.
    pub fn filled_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.filled_count() == Field::ALL.len()
    }

    /// First unset field in collection order.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| !self.is_set(*f))
    }

    /// Iterate `(field, value)` pairs in collection order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, Option<&FieldValue>)> {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Copy of the profile with the email slot masked, safe for logs and
    /// status payloads.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if let Some(FieldValue::Text(email)) = &self.values[Field::Email.index()] {
            copy.values[Field::Email.index()] = Some(FieldValue::Text(redact_email(email)));
        }
        copy
    }
}

fn redact_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{first}***@{domain}")
        }
        None => "***".to_string(),
    }
}

impl Serialize for TravelProfile {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(Field::ALL.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.as_str(), &value)?;
        }
        map.end()
    }
}

/// Who produced a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

/// One entry in the session transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Speaker,
    pub content: String,
    pub at: DateTime<Utc>,
}

impl Turn {
    pub fn new(role: Speaker, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            at: Utc::now(),
        }
    }
}
