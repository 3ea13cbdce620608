use async_trait::async_trait;

use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::{Hairstyle, Suggestion};

pub struct RecommendHairstylesParams {
    pub image_url: String,
    pub gender: String,
    pub catalog: Vec<Hairstyle>,
}

#[async_trait]
pub trait RecommendHairstylesUseCase: Send + Sync {
    /// Image-based variant: the model receives the raw image URL.
    async fn execute(
        &self,
        params: RecommendHairstylesParams,
    ) -> Result<Vec<Suggestion>, RecommendationError>;

    /// Face-verified variant: the image is gated through the face-analysis
    /// collaborator before the model is prompted.
    async fn execute_face_verified(
        &self,
        params: RecommendHairstylesParams,
    ) -> Result<Vec<Suggestion>, RecommendationError>;
}
