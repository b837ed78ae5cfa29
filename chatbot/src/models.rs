use serde::{Deserialize, Serialize};

/// A PDF picked by the user, read once and held until replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Body shared by every endpoint. The service sets `message` or `answer` on
/// success and `error` on failure.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ServiceReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_tolerates_missing_fields() {
        let reply: ServiceReply = serde_json::from_str(r#"{"answer":"$42"}"#).unwrap();
        assert_eq!(reply.answer.as_deref(), Some("$42"));
        assert!(reply.message.is_none());
        assert!(reply.error.is_none());
    }

    #[test]
    fn ask_request_uses_question_key() {
        let body = serde_json::to_value(AskRequest {
            question: "What is the total?".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "question": "What is the total?" }));
    }
}
