use serde_json::Value;

use crate::domain::models::{AiReply, AiRequest, ChatTurn, PersonalizedRecommendations};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::LogOperation;
use crate::shared::services::{ApiClient, Transport};

pub const AI_ERROR: &str = "Sorry, there was an error getting recommendations. Please try again.";
pub const PERSONALIZED_FAILED: &str = "Failed to load recommendations";
pub const PERSONALIZED_ERROR: &str = "An error occurred while loading your recommendations";
pub const NO_HISTORY_HINT: &str = "We need more search data to provide personalized recommendations. Try searching for some products first!";

/// Send the conversation so far, ending with the user's latest turn.
pub async fn ask_ai<T: Transport>(
    api: &ApiClient<T>,
    conversation: &[ChatTurn],
    previous_question: &str,
) -> Result<AiReply> {
    let body = AiRequest {
        conversation,
        previous_question,
    };
    let response = api
        .post_json(LogOperation::Recommendations, "/ai-recommendations", &body)
        .await?;
    if !response.ok() {
        return Err(AppError::Backend(AI_ERROR.to_string()));
    }

    Ok(AiReply::from_json(&response.body)?)
}

pub async fn fetch_personalized<T: Transport>(
    api: &ApiClient<T>,
) -> Result<PersonalizedRecommendations> {
    let response = api
        .get(LogOperation::Recommendations, "/personalized-recommendations", &[])
        .await
        .map_err(|_| AppError::Backend(PERSONALIZED_ERROR.to_string()))?;

    if !response.ok() {
        let reason = response
            .json::<Value>()
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| PERSONALIZED_FAILED.to_string());
        return Err(AppError::Backend(reason));
    }

    PersonalizedRecommendations::from_json(&response.body)
        .map_err(|_| AppError::Backend(PERSONALIZED_ERROR.to_string()))
}
