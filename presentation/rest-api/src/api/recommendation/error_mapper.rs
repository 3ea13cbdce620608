use business::domain::recommendation::errors::RecommendationError;

use crate::api::error::{ErrorBody, IntoErrorBody};

/// Maps each rejection path to its fixed, user-facing message. These
/// strings are part of the API contract and must not drift.
impl IntoErrorBody for RecommendationError {
    fn into_error_body(self) -> ErrorBody {
        let message = match self {
            RecommendationError::ImageUrlMissing => "Image URL missing",
            RecommendationError::NoHairstylesProvided => "No salon hairstyles provided",
            RecommendationError::GenderNotProvided => "Gender not provided",
            RecommendationError::NoStylesForGender => {
                "No hairstyles available for selected gender"
            }
            RecommendationError::UnusableFace => {
                "Uploaded image does not contain a usable human face"
            }
            RecommendationError::EmptyAiResponse => "Empty AI response",
            RecommendationError::NoSuitableHairstyle => "No suitable hairstyle found",
            RecommendationError::GenderMismatch => {
                "Uploaded image gender does not match selected gender"
            }
            RecommendationError::NoMatchingHairstyle => "No matching hairstyle found",
        };

        ErrorBody {
            error: message.to_string(),
        }
    }
}
