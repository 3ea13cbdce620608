/// Configuration for Face++ API access. The key/secret pair is injected
/// from the environment, never embedded in code.
pub struct FaceppConfig {
    pub api_key: String,
    pub api_secret: String,
}

impl FaceppConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("FACEPP_API_KEY")
            .expect("FACEPP_API_KEY environment variable must be set");
        let api_secret = std::env::var("FACEPP_API_SECRET")
            .expect("FACEPP_API_SECRET environment variable must be set");
        Self {
            api_key,
            api_secret,
        }
    }
}
