use async_trait::async_trait;
use serde_json::Value;

use super::errors::RecommendationError;

/// Service port for the generative-text collaborator. Single-shot and
/// stateless; no conversation history is kept between calls.
///
/// Adapters catch every transport or payload failure and surface it as
/// [`RecommendationError::EmptyAiResponse`] instead of a system fault.
#[async_trait]
pub trait HairstyleAdvisorService: Send + Sync {
    async fn ask(&self, prompt: &str) -> Result<String, RecommendationError>;
}

/// Service port for the face-analysis collaborator.
///
/// Returns the collaborator's raw payload untouched; a total outbound
/// failure degrades to `Value::Null` ("no face data"), which the face
/// validator then rejects deterministically.
#[async_trait]
pub trait FaceAnalysisService: Send + Sync {
    async fn analyze(&self, image_url: &str) -> Value;
}
