//! Travel planner dialogue: slot-filling conversation.
//!
//! The session asks for each required field in a fixed order, validates the
//! answer, and once every field is filled hands the profile to a
//! [`ResponseGenerator`] to produce the itinerary.

pub mod generator;
pub mod model;
pub mod prompts;
pub mod session;
pub mod state;
pub mod validation;

pub use generator::{GeneratorConfig, LlmGenerator, ResponseGenerator};
pub use model::{FieldValue, Speaker, TravelProfile, Turn};
pub use session::{DialogueSession, PromptStyle, SessionBuilder, SessionStatus};
pub use state::{DialogueState, Field};
pub use validation::{FieldRule, ValidationError};
