use reqwest::Client;

/// Shared Face++ HTTP client configuration. The key/secret pair travels in
/// the form body, as the detection API requires.
pub struct FaceppClient {
    pub client: Client,
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
}

impl FaceppClient {
    pub fn new(api_key: String, api_secret: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            api_secret,
            base_url: "https://api-us.faceplusplus.com/facepp/v3".to_string(),
        }
    }

    /// Returns the face detection endpoint URL.
    pub fn detect_url(&self) -> String {
        format!("{}/detect", self.base_url)
    }
}
