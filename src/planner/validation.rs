//! Per-field validation rules.
//!
//! Each [`Field`] maps to one [`FieldRule`]. A rule turns trimmed raw input
//! into a [`FieldValue`] or a [`ValidationError`] whose message is shown to
//! the user verbatim.

use std::num::{IntErrorKind, ParseIntError};
use std::sync::LazyLock;

use regex::Regex;

use super::model::FieldValue;
use super::state::Field;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email pattern compiles"));

/// Smallest accepted trip length.
pub const MIN_DAYS: u32 = 1;
/// Largest accepted trip length.
pub const MAX_DAYS: u32 = 30;

/// How a field's input is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Any non-empty text, kept as-is.
    NonEmpty,
    /// `local@domain.tld`.
    Email,
    /// Base-10 integer within an inclusive range.
    DayCount { min: u32, max: u32 },
}

/// A rejected answer. Displays as the user-facing retry message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a value for your {0}.")]
    Empty(Field),

    #[error("Please provide a valid email address.")]
    InvalidEmail,

    #[error("Please enter a valid number of days.")]
    NotANumber,

    #[error("Please enter a number of days between {min} and {max}.")]
    OutOfRange { min: u32, max: u32 },
}

impl Field {
    /// The validation rule for this field.
    pub fn rule(self) -> FieldRule {
        match self {
            Field::Email => FieldRule::Email,
            Field::Days => FieldRule::DayCount {
                min: MIN_DAYS,
                max: MAX_DAYS,
            },
            Field::Name | Field::Destination | Field::Source | Field::Budget | Field::Dates => {
                FieldRule::NonEmpty
            }
        }
    }

    /// Trim and validate raw input for this field.
    pub fn validate(self, raw: &str) -> Result<FieldValue, ValidationError> {
        let input = raw.trim();
        match self.rule() {
            FieldRule::NonEmpty => {
                if input.is_empty() {
                    Err(ValidationError::Empty(self))
                } else {
                    Ok(FieldValue::Text(input.to_string()))
                }
            }
            FieldRule::Email => {
                if EMAIL_RE.is_match(input) {
                    Ok(FieldValue::Text(input.to_string()))
                } else {
                    Err(ValidationError::InvalidEmail)
                }
            }
            FieldRule::DayCount { min, max } => {
                let days: i64 = input.parse().map_err(|e: ParseIntError| match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        ValidationError::OutOfRange { min, max }
                    }
                    _ => ValidationError::NotANumber,
                })?;
                if days < i64::from(min) || days > i64::from(max) {
                    return Err(ValidationError::OutOfRange { min, max });
                }
                // In range, so the narrowing cannot fail.
                Ok(FieldValue::Number(days as u32))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table() {
        assert_eq!(Field::Email.rule(), FieldRule::Email);
        assert_eq!(Field::Days.rule(), FieldRule::DayCount { min: 1, max: 30 });
        for field in [
            Field::Name,
            Field::Destination,
            Field::Source,
            Field::Budget,
            Field::Dates,
        ] {
            assert_eq!(field.rule(), FieldRule::NonEmpty, "{field}");
        }
    }

    #[test]
    fn text_fields_trim_and_pass_through() {
        assert_eq!(
            Field::Name.validate("  Ana  "),
            Ok(FieldValue::Text("Ana".into()))
        );
        assert_eq!(Field::Name.validate("   "), Err(ValidationError::Empty(Field::Name)));
    }

    #[test]
    fn budget_is_not_coerced() {
        assert_eq!(
            Field::Budget.validate("1000-1500"),
            Ok(FieldValue::Text("1000-1500".into()))
        );
        assert_eq!(
            Field::Budget.validate("1500"),
            Ok(FieldValue::Text("1500".into()))
        );
    }

    #[test]
    fn email_accepts_valid_addresses() {
        for ok in ["a@b.co", "ana@x.com", " first.last-1@mail.example.org ", "a_b@c-d.io"] {
            assert!(Field::Email.validate(ok).is_ok(), "{ok} should be accepted");
        }
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in ["not-an-email", "bad-email", "a@b", "@b.co", "a@.", "a b@c.com", "a@b.co!", ""] {
            assert_eq!(
                Field::Email.validate(bad),
                Err(ValidationError::InvalidEmail),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn days_boundaries() {
        assert_eq!(Field::Days.validate("1"), Ok(FieldValue::Number(1)));
        assert_eq!(Field::Days.validate(" 30 "), Ok(FieldValue::Number(30)));
        assert_eq!(
            Field::Days.validate("0"),
            Err(ValidationError::OutOfRange { min: 1, max: 30 })
        );
        assert_eq!(
            Field::Days.validate("31"),
            Err(ValidationError::OutOfRange { min: 1, max: 30 })
        );
        assert_eq!(
            Field::Days.validate("-4"),
            Err(ValidationError::OutOfRange { min: 1, max: 30 })
        );
        // Too large for any integer type is still a number, just out of range.
        assert_eq!(
            Field::Days.validate("99999999999999999999"),
            Err(ValidationError::OutOfRange { min: 1, max: 30 })
        );
        assert_eq!(
            Field::Days.validate("-99999999999999999999"),
            Err(ValidationError::OutOfRange { min: 1, max: 30 })
        );
        assert_eq!(Field::Days.validate("abc"), Err(ValidationError::NotANumber));
        assert_eq!(Field::Days.validate("7.5"), Err(ValidationError::NotANumber));
        assert_eq!(Field::Days.validate(""), Err(ValidationError::NotANumber));
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please provide a valid email address."
        );
        assert_eq!(
            ValidationError::NotANumber.to_string(),
            "Please enter a valid number of days."
        );
        assert_eq!(
            ValidationError::OutOfRange { min: 1, max: 30 }.to_string(),
            "Please enter a number of days between 1 and 30."
        );
        assert_eq!(
            ValidationError::Empty(Field::Destination).to_string(),
            "Please enter a value for your destination."
        );
    }
}
