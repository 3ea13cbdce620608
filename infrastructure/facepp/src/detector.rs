use async_trait::async_trait;
use serde_json::Value;

use business::domain::recommendation::services::FaceAnalysisService;

use crate::client::FaceppClient;

/// Attributes requested from the detection API. The validator only reads
/// headpose and facequality; gender and age enrich the raw payload for
/// logging and future use.
const RETURN_ATTRIBUTES: &str = "gender,age,headpose,facequality";

pub struct FaceAnalysisFacepp {
    client: FaceppClient,
}

impl FaceAnalysisFacepp {
    pub fn new(client: FaceppClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FaceAnalysisService for FaceAnalysisFacepp {
    /// Returns the raw detection payload. Every outbound failure degrades
    /// to `Value::Null` so the face validator rejects it deterministically
    /// instead of the request crashing.
    async fn analyze(&self, image_url: &str) -> Value {
        let form = [
            ("api_key", self.client.api_key.as_str()),
            ("api_secret", self.client.api_secret.as_str()),
            ("image_url", image_url),
            ("return_attributes", RETURN_ATTRIBUTES),
        ];

        let response = match self
            .client
            .client
            .post(self.client.detect_url())
            .form(&form)
            .send()
            .await
        {
            Ok(response) => response,
            Err(_) => return Value::Null,
        };

        if !response.status().is_success() {
            return Value::Null;
        }

        response.json().await.unwrap_or(Value::Null)
    }
}
