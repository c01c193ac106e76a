//! Dialogue state machine: tracks which field the user is answering.

use serde::{Deserialize, Serialize};

/// A required profile field, in collection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Destination,
    Source,
    Days,
    Budget,
    Dates,
}

impl Field {
    /// Every field in the order it is collected.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Destination,
        Field::Source,
        Field::Days,
        Field::Budget,
        Field::Dates,
    ];

    /// Position of this field in collection order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The field collected after this one, if any.
    pub fn next(self) -> Option<Field> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Destination => "destination",
            Self::Source => "source",
            Self::Days => "days",
            Self::Budget => "budget",
            Self::Dates => "dates",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown field '{s}'"))
    }
}

/// The phases of the planning conversation.
///
/// Progresses linearly: Init → Collecting(Name) → … → Collecting(Dates) →
/// Complete.
///
/// Serializes as its flat tag: `"init"`, a field name, or `"complete"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DialogueState {
    #[default]
    Init,
    Collecting(Field),
    Complete,
}

impl DialogueState {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: DialogueState) -> bool {
        self.next() == Some(target)
    }

    /// Whether this state is terminal (all fields collected).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// The field currently awaiting input, if any.
    pub fn active_field(&self) -> Option<Field> {
        match self {
            Self::Collecting(field) => Some(*field),
            _ => None,
        }
    }

    /// Get the next state in the linear progression, if any.
    pub fn next(&self) -> Option<DialogueState> {
        match self {
            Self::Init => Some(Self::Collecting(Field::Name)),
            Self::Collecting(field) => Some(
                field
                    .next()
                    .map(Self::Collecting)
                    .unwrap_or(Self::Complete),
            ),
            Self::Complete => None,
        }
    }
}

impl std::fmt::Display for DialogueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::Collecting(field) => write!(f, "{field}"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

impl std::str::FromStr for DialogueState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "init" => Ok(Self::Init),
            "complete" => Ok(Self::Complete),
            other => other
                .parse()
                .map(Self::Collecting)
                .map_err(|_| format!("unknown dialogue state '{other}'")),
        }
    }
}

impl From<DialogueState> for String {
    fn from(state: DialogueState) -> Self {
        state.to_string()
    }
}

impl TryFrom<String> for DialogueState {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
