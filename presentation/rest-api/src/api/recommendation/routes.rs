use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::recommendation::use_cases::recommend::RecommendHairstylesUseCase;

use crate::api::error::IntoErrorBody;
use crate::api::recommendation::dto::{
    RecommendationRequest, RecommendationResponse, SuggestionList,
};
use crate::api::tags::ApiTags;

pub struct RecommendationApi {
    recommend_use_case: Arc<dyn RecommendHairstylesUseCase>,
}

impl RecommendationApi {
    pub fn new(recommend_use_case: Arc<dyn RecommendHairstylesUseCase>) -> Self {
        Self { recommend_use_case }
    }
}

/// Recommendation API
///
/// Endpoints for AI-backed hairstyle recommendations against a salon's
/// per-request catalog. Domain failures are answered with HTTP 200 and an
/// `error` body; transport-level statuses are never used for them.
#[OpenApi]
impl RecommendationApi {
    /// Recommend hairstyles from a photo
    ///
    /// The model sees the photo URL directly and verifies the person's
    /// gender itself. Returns at most two suggestions from the submitted
    /// catalog.
    #[oai(
        path = "/recommendations",
        method = "post",
        tag = "ApiTags::Recommendations"
    )]
    async fn recommend(&self, body: Json<RecommendationRequest>) -> Json<RecommendationResponse> {
        match self.recommend_use_case.execute(body.0.into_params()).await {
            Ok(suggestions) => Json(RecommendationResponse::Suggestions(SuggestionList {
                suggestions: suggestions.into_iter().map(Into::into).collect(),
            })),
            Err(err) => Json(RecommendationResponse::Error(err.into_error_body())),
        }
    }

    /// Recommend hairstyles after a face-quality check
    ///
    /// The photo is first run through the face-analysis collaborator; the
    /// model is only prompted when exactly one well-posed, sufficiently
    /// sharp face is found.
    #[oai(
        path = "/recommendations/face-verified",
        method = "post",
        tag = "ApiTags::Recommendations"
    )]
    async fn recommend_face_verified(
        &self,
        body: Json<RecommendationRequest>,
    ) -> Json<RecommendationResponse> {
        match self
            .recommend_use_case
            .execute_face_verified(body.0.into_params())
            .await
        {
            Ok(suggestions) => Json(RecommendationResponse::Suggestions(SuggestionList {
                suggestions: suggestions.into_iter().map(Into::into).collect(),
            })),
            Err(err) => Json(RecommendationResponse::Error(err.into_error_body())),
        }
    }
}
