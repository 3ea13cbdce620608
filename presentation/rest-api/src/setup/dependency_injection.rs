use std::sync::Arc;

use logger::TracingLogger;

use facepp::client::FaceppClient;
use facepp::detector::FaceAnalysisFacepp;
use gemini::advisor::HairstyleAdvisorGemini;
use gemini::client::GeminiClient;

use business::application::recommendation::recommend::RecommendHairstylesUseCaseImpl;

use crate::config::facepp_config::FaceppConfig;
use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub recommendation_api: crate::api::recommendation::routes::RecommendationApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let gemini_config = GeminiConfig::from_env();
        let gemini_client = GeminiClient::new(gemini_config.api_key);
        let advisor = Arc::new(HairstyleAdvisorGemini::new(gemini_client));

        let facepp_config = FaceppConfig::from_env();
        let facepp_client = FaceppClient::new(facepp_config.api_key, facepp_config.api_secret);
        let face_analyzer = Arc::new(FaceAnalysisFacepp::new(facepp_client));

        // Recommendation use case
        let recommend_use_case = Arc::new(RecommendHairstylesUseCaseImpl {
            advisor,
            face_analyzer,
            logger,
        });

        let recommendation_api =
            crate::api::recommendation::routes::RecommendationApi::new(recommend_use_case);

        Self {
            health_api,
            recommendation_api,
        }
    }
}
