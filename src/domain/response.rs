use serde::de::DeserializeOwned;

/// Raw HTTP result of an ActionKit call: status code and body, uninterpreted.
///
/// Non-2xx statuses are returned here rather than as errors; inspecting them is up to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
