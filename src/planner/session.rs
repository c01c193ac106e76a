//! DialogueSession: collects the travel profile one field at a time and
//! hands the finished profile to the response generator.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PlannerConfig;
use crate::error::{Result as PlannerResult, SessionError};
use crate::llm::create_provider;

use super::generator::{GeneratorConfig, LlmGenerator, ResponseGenerator};
use super::model::{Speaker, TravelProfile, Turn};
use super::prompts::{
    GREETING, field_prompt, follow_up_request, itinerary_request, question_request,
};
use super::state::{DialogueState, Field};

/// How field questions are phrased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptStyle {
    /// Fixed text per field; deterministic.
    #[default]
    Static,
    /// Ask the generator to phrase each question, falling back to the fixed
    /// text if it fails.
    Generated,
}

impl std::str::FromStr for PromptStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "generated" => Ok(Self::Generated),
            other => Err(format!("unknown prompt style '{other}' (expected static or generated)")),
        }
    }
}

/// Builder for [`DialogueSession`]. A generator is required.
#[derive(Default)]
pub struct SessionBuilder {
    generator: Option<Arc<dyn ResponseGenerator>>,
    prompt_style: PromptStyle,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generator(mut self, generator: Arc<dyn ResponseGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn prompt_style(mut self, style: PromptStyle) -> Self {
        self.prompt_style = style;
        self
    }

    pub fn build(self) -> Result<DialogueSession, SessionError> {
        let generator = self.generator.ok_or(SessionError::MissingGenerator)?;
        let mut session = DialogueSession::new(generator);
        session.prompt_style = self.prompt_style;
        Ok(session)
    }
}

/// Snapshot of a session for status displays.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub id: Uuid,
    pub state: DialogueState,
    pub filled: usize,
    pub total: usize,
    /// Profile with the email masked.
    pub profile: TravelProfile,
}

/// A single traveler's planning conversation.
///
/// Every public call returns displayable text; validation and generation
/// failures are rendered as messages rather than returned as errors.
pub struct DialogueSession {
    id: Uuid,
    generator: Arc<dyn ResponseGenerator>,
    prompt_style: PromptStyle,
    profile: TravelProfile,
    state: DialogueState,
    transcript: Vec<Turn>,
}

impl DialogueSession {
    pub fn new(generator: Arc<dyn ResponseGenerator>) -> Self {
        Self {
            id: Uuid::new_v4(),
            generator,
            prompt_style: PromptStyle::Static,
            profile: TravelProfile::default(),
            state: DialogueState::Init,
            transcript: Vec::new(),
        }
    }

    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Build a session backed by the configured LLM.
    pub fn from_config(config: &PlannerConfig) -> PlannerResult<Self> {
        let llm = create_provider(&config.llm_config())?;
        let generator = Arc::new(LlmGenerator::new(
            llm,
            GeneratorConfig {
                temperature: config.temperature,
                max_tokens: config.max_tokens,
            },
        ));
        let session = Self::builder()
            .generator(generator)
            .prompt_style(config.prompt_style)
            .build()?;
        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> DialogueState {
        self.state
    }

    pub fn profile(&self) -> &TravelProfile {
        &self.profile
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn prompt_style(&self) -> PromptStyle {
        self.prompt_style
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            id: self.id,
            state: self.state,
            filled: self.profile.filled_count(),
            total: Field::ALL.len(),
            profile: self.profile.redacted(),
        }
    }

    /// Greet the user and begin collecting the first field.
    ///
    /// Only mutates state when called in `Init`; otherwise re-emits the
    /// current prompt.
    pub async fn start(&mut self) -> String {
        if self.state != DialogueState::Init {
            return self.next_prompt().await;
        }
        self.state = DialogueState::Collecting(Field::Name);
        tracing::info!(session = %self.id, "Travel planning session started");
        self.record(Speaker::Assistant, GREETING);
        GREETING.to_string()
    }

    /// Process one line of user input and return the reply.
    pub async fn submit(&mut self, raw_input: &str) -> String {
        self.record(Speaker::User, raw_input);

        let reply = match self.state {
            DialogueState::Init => {
                // Caller skipped start(); treat the input as the first answer.
                self.state = DialogueState::Collecting(Field::Name);
                self.accept(Field::Name, raw_input).await
            }
            DialogueState::Collecting(field) => self.accept(field, raw_input).await,
            DialogueState::Complete => self.follow_up(raw_input).await,
        };

        self.record(Speaker::Assistant, &reply);
        reply
    }

    /// Text for the current state: greeting, field question, or the
    /// generated itinerary once complete.
    pub async fn next_prompt(&self) -> String {
        match self.state {
            DialogueState::Init => GREETING.to_string(),
            DialogueState::Collecting(field) => self.prompt_for(field).await,
            DialogueState::Complete => match self.build_generation_request() {
                Some(request) => self.generate(&request).await,
                None => {
                    tracing::error!(session = %self.id, "Complete state with unfilled profile");
                    self.prompt_for(self.profile.first_missing().unwrap_or(Field::Name))
                        .await
                }
            },
        }
    }

    /// The itinerary request for the collected profile, if complete.
    pub fn build_generation_request(&self) -> Option<String> {
        itinerary_request(&self.profile)
    }

    /// Discard everything and start over with a fresh session.
    pub async fn reset(&mut self) -> String {
        let previous = self.id;
        *self = Self {
            id: Uuid::new_v4(),
            generator: Arc::clone(&self.generator),
            prompt_style: self.prompt_style,
            profile: TravelProfile::default(),
            state: DialogueState::Init,
            transcript: Vec::new(),
        };
        tracing::info!(previous = %previous, session = %self.id, "Session reset");
        self.start().await
    }

    async fn accept(&mut self, field: Field, raw_input: &str) -> String {
        let value = match field.validate(raw_input) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(session = %self.id, field = %field, "Rejected input: {}", e);
                return e.to_string();
            }
        };

        if !self.profile.fill(field, value) {
            tracing::warn!(session = %self.id, field = %field, "Field already set, keeping existing value");
        }

        let next = match self.profile.first_missing() {
            Some(missing) => DialogueState::Collecting(missing),
            None => DialogueState::Complete,
        };
        debug_assert!(self.state.can_transition_to(next));
        self.state = next;

        tracing::debug!(
            session = %self.id,
            field = %field,
            filled = self.profile.filled_count(),
            "Accepted field"
        );
        if next.is_terminal() {
            tracing::info!(session = %self.id, "Profile complete, generating itinerary");
        }

        self.next_prompt().await
    }

    async fn follow_up(&self, raw_input: &str) -> String {
        let question = raw_input.trim();
        match self.build_generation_request() {
            Some(request) if !question.is_empty() => {
                self.generate(&follow_up_request(&request, question)).await
            }
            _ => self.next_prompt().await,
        }
    }

    async fn prompt_for(&self, field: Field) -> String {
        match self.prompt_style {
            PromptStyle::Static => field_prompt(field).to_string(),
            PromptStyle::Generated => {
                match self.generator.generate(&question_request(field)).await {
                    Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
                    Ok(_) => field_prompt(field).to_string(),
                    Err(e) => {
                        tracing::warn!(field = %field, "Question generation failed: {}", e);
                        field_prompt(field).to_string()
                    }
                }
            }
        }
    }

    async fn generate(&self, prompt: &str) -> String {
        match self.generator.generate(prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(session = %self.id, "Generation failed: {}", e);
                format!("Error generating response: {e}")
            }
        }
    }

    fn record(&mut self, role: Speaker, content: &str) {
        self.transcript.push(Turn::new(role, content));
    }
}
