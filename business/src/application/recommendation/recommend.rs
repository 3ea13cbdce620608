use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recommendation::catalog::{GenderMatchMode, filter_by_gender};
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::face::validate_face;
use crate::domain::recommendation::matcher::{ParsePolicy, parse_reply};
use crate::domain::recommendation::model::{Hairstyle, Suggestion};
use crate::domain::recommendation::prompt::{build_face_verified_prompt, build_image_prompt};
use crate::domain::recommendation::services::{FaceAnalysisService, HairstyleAdvisorService};
use crate::domain::recommendation::use_cases::recommend::{
    RecommendHairstylesParams, RecommendHairstylesUseCase,
};

pub struct RecommendHairstylesUseCaseImpl {
    pub advisor: Arc<dyn HairstyleAdvisorService>,
    pub face_analyzer: Arc<dyn FaceAnalysisService>,
    pub logger: Arc<dyn Logger>,
}

impl RecommendHairstylesUseCaseImpl {
    /// Rejects malformed requests before any collaborator is contacted.
    fn validate(params: &RecommendHairstylesParams) -> Result<(), RecommendationError> {
        if params.image_url.trim().is_empty() {
            return Err(RecommendationError::ImageUrlMissing);
        }
        if params.catalog.is_empty() {
            return Err(RecommendationError::NoHairstylesProvided);
        }
        if params.gender.trim().is_empty() {
            return Err(RecommendationError::GenderNotProvided);
        }
        Ok(())
    }

    fn filter(
        params: &RecommendHairstylesParams,
        mode: GenderMatchMode,
    ) -> Result<Vec<Hairstyle>, RecommendationError> {
        let filtered = filter_by_gender(&params.catalog, &params.gender, mode);
        if filtered.is_empty() {
            return Err(RecommendationError::NoStylesForGender);
        }
        Ok(filtered)
    }

    fn allowed_names(filtered: &[Hairstyle]) -> Vec<String> {
        filtered.iter().map(|style| style.name.clone()).collect()
    }
}

#[async_trait]
impl RecommendHairstylesUseCase for RecommendHairstylesUseCaseImpl {
    async fn execute(
        &self,
        params: RecommendHairstylesParams,
    ) -> Result<Vec<Suggestion>, RecommendationError> {
        Self::validate(&params)?;

        let filtered = Self::filter(&params, GenderMatchMode::Segment)?;
        self.logger.info(&format!(
            "Recommending from {} styles for gender '{}'",
            filtered.len(),
            params.gender
        ));

        let prompt =
            build_image_prompt(&params.image_url, &Self::allowed_names(&filtered), &params.gender);
        let reply = self.advisor.ask(&prompt).await?;

        let suggestions = parse_reply(&reply, &filtered, ParsePolicy::image())?;
        self.logger
            .info(&format!("Matched {} suggestions", suggestions.len()));

        Ok(suggestions)
    }

    async fn execute_face_verified(
        &self,
        params: RecommendHairstylesParams,
    ) -> Result<Vec<Suggestion>, RecommendationError> {
        Self::validate(&params)?;

        let filtered = Self::filter(&params, GenderMatchMode::Exact)?;
        self.logger.info(&format!(
            "Recommending from {} styles for gender '{}' after face check",
            filtered.len(),
            params.gender
        ));

        let payload = self.face_analyzer.analyze(&params.image_url).await;
        let analysis = validate_face(&payload).inspect_err(|_| {
            self.logger.warn("Face analysis rejected the uploaded image");
        })?;

        let prompt = build_face_verified_prompt(
            &analysis.summary(),
            &Self::allowed_names(&filtered),
            &params.gender,
        );
        let reply = self.advisor.ask(&prompt).await?;

        let suggestions = parse_reply(&reply, &filtered, ParsePolicy::face_verified())?;
        self.logger
            .info(&format!("Matched {} suggestions", suggestions.len()));

        Ok(suggestions)
    }
}
