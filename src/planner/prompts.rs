//! Fixed prompt text and generation request templates.

use super::model::TravelProfile;
use super::state::Field;

/// Opening line; also asks for the first field.
pub const GREETING: &str = "Hello! I'm here to help you plan your trip. What's your name?";

/// System message sent with every generation call.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful travel planning assistant. Generate specific and detailed responses.";

/// Static question for a field.
pub fn field_prompt(field: Field) -> &'static str {
    match field {
        Field::Name => "What's your name?",
        Field::Email => "What email address should I send your itinerary to?",
        Field::Destination => "Where would you like to travel?",
        Field::Source => "Which city or airport will you be departing from?",
        Field::Days => "How many days will your trip last? (1-30)",
        Field::Budget => "What's your total budget for the trip (in USD)?",
        Field::Dates => "When are you planning to travel (month or season)?",
    }
}

/// Request asking the generator to phrase a field's question.
pub fn question_request(field: Field) -> String {
    format!("Generate a friendly question asking for the user's {field} for travel planning.")
}

/// Build the itinerary request from a fully populated profile.
///
/// Returns `None` if any field is still unset.
pub fn itinerary_request(profile: &TravelProfile) -> Option<String> {
    if !profile.is_complete() {
        return None;
    }
    let value = |field: Field| {
        profile
            .get(field)
            .map(ToString::to_string)
            .unwrap_or_default()
    };

    Some(format!(
        "Generate a detailed travel itinerary with the following information:\n\
         - Traveler: {name}\n\
         - Deliver to: {email}\n\
         - From: {source}\n\
         - To: {destination}\n\
         - Duration: {days} days\n\
         - Budget: {budget} USD\n\
         - Dates: {dates}\n\
         \n\
         Include:\n\
         1. Suggested flight options\n\
         2. Recommended accommodations within budget\n\
         3. Day-by-day itinerary with specific attractions and activities\n\
         4. Budget breakdown\n\
         5. Local travel tips\n\
         6. Must-try local cuisine",
        name = value(Field::Name),
        email = value(Field::Email),
        source = value(Field::Source),
        destination = value(Field::Destination),
        days = value(Field::Days),
        budget = value(Field::Budget),
        dates = value(Field::Dates),
    ))
}

/// Wrap a post-completion question with the trip context.
pub fn follow_up_request(itinerary_request: &str, question: &str) -> String {
    format!(
        "The traveler already received an itinerary for this trip:\n\n\
         {itinerary_request}\n\n\
         Answer their follow-up question about the trip:\n{question}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::model::FieldValue;

    fn complete_profile() -> TravelProfile {
        let mut p = TravelProfile::default();
        let answers = [
            (Field::Name, FieldValue::Text("Ana".into())),
            (Field::Email, FieldValue::Text("ana@x.com".into())),
            (Field::Destination, FieldValue::Text("Lisbon".into())),
            (Field::Source, FieldValue::Text("Chicago".into())),
            (Field::Days, FieldValue::Number(9)),
            (Field::Budget, FieldValue::Text("1500".into())),
            (Field::Dates, FieldValue::Text("June 2025".into())),
        ];
        for (field, value) in answers {
            p.fill(field, value);
        }
        p
    }

    #[test]
    fn every_field_has_a_prompt() {
        for field in Field::ALL {
            assert!(!field_prompt(field).is_empty());
        }
        assert!(field_prompt(Field::Days).contains("1-30"));
    }

    #[test]
    fn itinerary_request_embeds_profile() {
        let request = itinerary_request(&complete_profile()).unwrap();
        assert!(request.contains("- Traveler: Ana"));
        assert!(request.contains("- From: Chicago"));
        assert!(request.contains("- To: Lisbon"));
        assert!(request.contains("- Duration: 9 days"));
        assert!(request.contains("- Budget: 1500 USD"));
        assert!(request.contains("- Dates: June 2025"));
        assert!(request.contains("- Deliver to: ana@x.com"));
        assert!(request.contains("6. Must-try local cuisine"));
    }

    #[test]
    fn itinerary_request_requires_complete_profile() {
        let mut p = TravelProfile::default();
        p.fill(Field::Name, FieldValue::Text("Ana".into()));
        assert!(itinerary_request(&p).is_none());
    }

    #[test]
    fn question_request_names_field() {
        assert_eq!(
            question_request(Field::Source),
            "Generate a friendly question asking for the user's source for travel planning."
        );
    }

    #[test]
    fn follow_up_carries_context() {
        let req = follow_up_request("ITINERARY", "Is it rainy in June?");
        assert!(req.contains("ITINERARY"));
        assert!(req.ends_with("Is it rainy in June?"));
    }
}
