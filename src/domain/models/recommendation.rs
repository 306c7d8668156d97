use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::product::Product;

pub const OPENING_QUESTION: &str =
    "Hi! I'd like to help you find products you'll love. What are you looking for today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of the recommendation conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Body of `POST /ai-recommendations`.
#[derive(Debug, Clone, Serialize)]
pub struct AiRequest<'a> {
    pub conversation: &'a [ChatTurn],
    #[serde(rename = "previousQuestion")]
    pub previous_question: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawAiReply {
    #[serde(default)]
    response: Option<String>,
    #[serde(rename = "nextQuestion", default)]
    next_question: Option<String>,
    #[serde(default)]
    recommendations: Vec<Value>,
}

/// Assistant answer with an optional follow-up question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AiReply {
    pub response: String,
    /// Empty when the assistant has nothing more to ask.
    pub next_question: String,
    pub recommendations: Vec<Product>,
}

impl AiReply {
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        let raw: RawAiReply = serde_json::from_str(body)?;
        Ok(Self {
            response: raw.response.unwrap_or_default(),
            next_question: raw.next_question.unwrap_or_default(),
            recommendations: Product::list_from_values(&raw.recommendations),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawPersonalized {
    #[serde(default)]
    recommendations: Vec<Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Answer of `GET /personalized-recommendations`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalizedRecommendations {
    pub recommendations: Vec<Product>,
    pub message: Option<String>,
}

impl PersonalizedRecommendations {
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        let raw: RawPersonalized = serde_json::from_str(body)?;
        Ok(Self {
            recommendations: Product::list_from_values(&raw.recommendations),
            message: raw.message.filter(|m| !m.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let turns = vec![ChatTurn::user("a desk lamp")];
        let body = serde_json::to_value(AiRequest {
            conversation: &turns,
            previous_question: OPENING_QUESTION,
        })
        .unwrap();
        assert_eq!(body["conversation"][0]["role"], "user");
        assert_eq!(body["conversation"][0]["content"], "a desk lamp");
        assert_eq!(body["previousQuestion"], OPENING_QUESTION);
    }

    #[test]
    fn test_reply_without_next_question() {
        let reply = AiReply::from_json(r#"{"response":"Here you go","recommendations":[{"name":"Lamp"}]}"#)
            .unwrap();
        assert_eq!(reply.response, "Here you go");
        assert!(reply.next_question.is_empty());
        assert_eq!(reply.recommendations[0].title, "Lamp");
    }

    #[test]
    fn test_personalized_blank_message_is_none() {
        let parsed = PersonalizedRecommendations::from_json(r#"{"recommendations":[],"message":" "}"#)
            .unwrap();
        assert!(parsed.recommendations.is_empty());
        assert_eq!(parsed.message, None);
    }
}
