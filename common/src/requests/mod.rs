use serde::Serialize;

/// Request payload for the ask endpoint.
/// Contains the natural-language question to translate and execute.
#[derive(Serialize, Clone, Debug)]
pub struct AskRequest {
    pub question: String,
}

impl AskRequest {
    /// Returns `None` for an empty question. Callers must refuse empty input
    /// before anything reaches the network layer.
    pub fn new(question: &str) -> Option<Self> {
        if question.is_empty() {
            return None;
        }
        Some(AskRequest {
            question: question.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_question_is_rejected() {
        assert!(AskRequest::new("").is_none());
    }

    #[test]
    fn nonempty_question_serializes_as_wire_body() {
        let request = AskRequest::new("List all customers").unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "question": "List all customers" })
        );
    }
}
