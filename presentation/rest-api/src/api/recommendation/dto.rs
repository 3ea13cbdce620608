use poem_openapi::{Object, Union};
use serde::{Deserialize, Serialize};

use business::domain::recommendation::model::{Hairstyle, Suggestion};
use business::domain::recommendation::use_cases::recommend::RecommendHairstylesParams;

use crate::api::error::ErrorBody;

/// One salon catalog entry, as submitted by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct HairstyleDto {
    /// Catalog identifier
    pub id: String,
    /// Display name, the key the matcher works with
    pub name: String,
    /// Demographic segment this style is offered to
    pub gender_category: String,
    /// Salon-authored description
    pub description: String,
    /// Catalog image URL
    pub image_url: String,
}

impl From<HairstyleDto> for Hairstyle {
    fn from(dto: HairstyleDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            gender_category: dto.gender_category,
            description: dto.description,
            image_url: dto.image_url,
        }
    }
}

/// Recommendation request body. Top-level fields are optional on the wire
/// so that missing values reach core validation and produce the dedicated
/// error messages instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct RecommendationRequest {
    /// URL of the customer's photo
    pub image_url: Option<String>,
    /// Requested gender segment
    pub gender: Option<String>,
    /// The salon's hairstyle catalog for this request
    pub hairstyles: Option<Vec<HairstyleDto>>,
}

impl RecommendationRequest {
    pub fn into_params(self) -> RecommendHairstylesParams {
        RecommendHairstylesParams {
            image_url: self.image_url.unwrap_or_default(),
            gender: self.gender.unwrap_or_default(),
            catalog: self
                .hairstyles
                .unwrap_or_default()
                .into_iter()
                .map(Hairstyle::from)
                .collect(),
        }
    }
}

/// One recommended hairstyle.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct SuggestionResponse {
    /// Canonical catalog name
    pub name: String,
    /// The model's reason, kept verbatim
    pub description: String,
    /// Catalog image URL
    pub image_url: String,
}

impl From<Suggestion> for SuggestionResponse {
    fn from(s: Suggestion) -> Self {
        Self {
            name: s.name,
            description: s.description,
            image_url: s.image_url,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SuggestionList {
    /// 1 or 2 entries, in reply order
    pub suggestions: Vec<SuggestionResponse>,
}

/// The two mutually exclusive response shapes: a suggestion list or a
/// single error message, never both.
#[derive(Debug, Union)]
pub enum RecommendationResponse {
    Suggestions(SuggestionList),
    Error(ErrorBody),
}
