/// Rejection paths of the recommendation pipeline.
/// Use code-style identifiers for all error variants; the REST layer maps
/// each one to its user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("recommendation.image_url_missing")]
    ImageUrlMissing,
    #[error("recommendation.no_hairstyles_provided")]
    NoHairstylesProvided,
    #[error("recommendation.gender_not_provided")]
    GenderNotProvided,
    #[error("recommendation.no_styles_for_gender")]
    NoStylesForGender,
    #[error("recommendation.unusable_face")]
    UnusableFace,
    #[error("recommendation.empty_ai_response")]
    EmptyAiResponse,
    #[error("recommendation.no_suitable_hairstyle")]
    NoSuitableHairstyle,
    #[error("recommendation.gender_mismatch")]
    GenderMismatch,
    #[error("recommendation.no_matching_hairstyle")]
    NoMatchingHairstyle,
}
