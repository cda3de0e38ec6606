//! Browser calls to the diagnosis backend
//!
//! Both endpoints are same-origin; the server forwards them to the backend.

/// Client-side API error
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ApiError {
    #[error("Network error. Please try again.")]
    Network(String),

    #[error("The assistant returned an error ({0})")]
    Status(u16),

    #[error("Unexpected response from the assistant")]
    Decode(String),

    #[error("{0}")]
    Rejected(String),
}

/// Send a chat message and return the assistant's reply
#[cfg(not(feature = "ssr"))]
pub async fn send_chat(message: &str) -> Result<String, ApiError> {
    use gloo_net::http::Request;

    use crate::core::assistant::{ChatRequest, ChatResponse};

    let request = ChatRequest {
        message: message.to_string(),
    };

    let response = Request::post("/chat")
        .json(&request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let reply: ChatResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(reply.response)
}

/// Upload an image for analysis
///
/// The backend answers 400 with a JSON error body when the upload is unusable,
/// so error bodies are decoded before falling back to the status code.
#[cfg(not(feature = "ssr"))]
pub async fn upload_image(
    file: &leptos::web_sys::File,
) -> Result<crate::core::assistant::PredictResponse, ApiError> {
    use gloo_net::http::Request;

    use crate::core::assistant::{IMAGE_FIELD, PredictResponse};

    let form = leptos::web_sys::FormData::new()
        .map_err(|_| ApiError::Network("FormData unavailable".to_string()))?;
    form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())
        .map_err(|_| ApiError::Network("Failed to attach image".to_string()))?;

    let response = Request::post("/predict")
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    match response.json::<PredictResponse>().await {
        Ok(reply) if reply.success => Ok(reply),
        Ok(reply) => Err(ApiError::Rejected(reply.message())),
        Err(_) if !response.ok() => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

#[cfg(feature = "ssr")]
pub async fn send_chat(_message: &str) -> Result<String, ApiError> {
    Err(ApiError::Network("Chat not available on server".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ApiError::Network("timeout".to_string()).to_string(),
            "Network error. Please try again."
        );
        assert_eq!(
            ApiError::Status(502).to_string(),
            "The assistant returned an error (502)"
        );
        assert_eq!(
            ApiError::Rejected("Please upload a medical image.".to_string()).to_string(),
            "Please upload a medical image."
        );
    }
}
