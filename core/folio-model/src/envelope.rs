use serde::{Deserialize, Serialize};

/// Envelope wrapped around every API response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Wraps a payload with no message or status.
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
            status: None,
        }
    }

    /// Unwraps the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}
