use serde_json::Value;

use super::errors::RecommendationError;

/// Bounding box minimum, in pixels.
const MIN_FACE_WIDTH: u64 = 150;
const MIN_FACE_HEIGHT: u64 = 150;
/// Collaborator quality scale is 0-100.
const MIN_QUALITY_SCORE: f64 = 20.0;
const MAX_ABS_YAW_DEGREES: f64 = 25.0;
const MAX_ABS_PITCH_DEGREES: f64 = 20.0;

/// Face metrics extracted from the analysis collaborator's raw payload.
/// Computed once per request and discarded with the response.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceAnalysis {
    pub face_count: usize,
    pub width: u64,
    pub height: u64,
    pub quality_score: f64,
    pub yaw_degrees: f64,
    pub pitch_degrees: f64,
}

impl FaceAnalysis {
    /// One-line text handed to the prompt builder. Opaque downstream; it is
    /// interpolated into the prompt and never re-parsed.
    pub fn summary(&self) -> String {
        format!(
            "Single verified face, {}x{} px, quality score {:.1}, yaw {:.1} degrees, pitch {:.1} degrees.",
            self.width, self.height, self.quality_score, self.yaw_degrees, self.pitch_degrees
        )
    }
}

/// Decides whether the raw analysis payload describes exactly one
/// well-posed, sufficiently sharp human face.
///
/// Every parsing failure (missing fields, wrong types, null payload from a
/// failed outbound call) is an unusable face, never a system error.
pub fn validate_face(payload: &Value) -> Result<FaceAnalysis, RecommendationError> {
    let faces = payload
        .get("faces")
        .and_then(|f| f.as_array())
        .ok_or(RecommendationError::UnusableFace)?;

    if faces.len() != 1 {
        return Err(RecommendationError::UnusableFace);
    }
    let face = &faces[0];

    let width = face
        .pointer("/face_rectangle/width")
        .and_then(|v| v.as_u64())
        .ok_or(RecommendationError::UnusableFace)?;
    let height = face
        .pointer("/face_rectangle/height")
        .and_then(|v| v.as_u64())
        .ok_or(RecommendationError::UnusableFace)?;
    let quality_score = face
        .pointer("/attributes/facequality/value")
        .and_then(|v| v.as_f64())
        .ok_or(RecommendationError::UnusableFace)?;
    let yaw_degrees = face
        .pointer("/attributes/headpose/yaw_angle")
        .and_then(|v| v.as_f64())
        .ok_or(RecommendationError::UnusableFace)?;
    let pitch_degrees = face
        .pointer("/attributes/headpose/pitch_angle")
        .and_then(|v| v.as_f64())
        .ok_or(RecommendationError::UnusableFace)?;

    let acceptable = width >= MIN_FACE_WIDTH
        && height >= MIN_FACE_HEIGHT
        && quality_score >= MIN_QUALITY_SCORE
        && yaw_degrees.abs() <= MAX_ABS_YAW_DEGREES
        && pitch_degrees.abs() <= MAX_ABS_PITCH_DEGREES;
    if !acceptable {
        return Err(RecommendationError::UnusableFace);
    }

    Ok(FaceAnalysis {
        face_count: faces.len(),
        width,
        height,
        quality_score,
        yaw_degrees,
        pitch_degrees,
    })
}
