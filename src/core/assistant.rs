//! Payloads exchanged with the diagnosis backend
//!
//! The backend is reached through the development proxy at `/predict`
//! (multipart image upload) and `/chat` (JSON message).

use serde::{Deserialize, Serialize};

/// Multipart field name the backend reads the uploaded image from
pub const IMAGE_FIELD: &str = "image";

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply from `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub response: String,
}

/// Model output attached to a successful prediction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    #[serde(rename = "class")]
    pub label: String,
    pub confidence: f64,
    pub description: String,
    pub source: String,
}

impl Prediction {
    /// Label the backend uses when the image does not look medical
    pub const UNCERTAIN: &'static str = "Uncertain";

    pub fn is_uncertain(&self) -> bool {
        self.label == Self::UNCERTAIN
    }

    /// Confidence formatted the way the backend phrases it, e.g. `87.50%`
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}

/// Reply from `POST /predict`, for both success and failure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(default)]
    pub prediction: Option<Prediction>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PredictResponse {
    /// Text to show in the conversation for this reply
    pub fn message(&self) -> String {
        if self.success {
            self.response
                .clone()
                .or_else(|| self.prediction.as_ref().map(|p| p.description.clone()))
                .unwrap_or_else(|| "The analysis finished without a summary.".to_string())
        } else {
            self.error
                .clone()
                .unwrap_or_else(|| "The image could not be analysed.".to_string())
        }
    }
}

/// Who wrote a conversation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

/// One entry of the dashboard conversation
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEntry {
    pub author: Author,
    pub text: String,
    pub prediction: Option<Prediction>,
}

impl ConversationEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            author: Author::User,
            text: text.into(),
            prediction: None,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            author: Author::Assistant,
            text: text.into(),
            prediction: None,
        }
    }

    pub fn from_prediction(response: PredictResponse) -> Self {
        Self {
            author: Author::Assistant,
            text: response.message(),
            prediction: response.prediction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_successful_prediction() {
        let json = r#"{
            "success": true,
            "prediction": {
                "class": "Pneumonia",
                "confidence": 0.875,
                "description": "AI detected Pneumonia with 87.50% confidence",
                "source": "Real Model"
            },
            "response": "Based on the uploaded image, the AI suggests: Pneumonia (Confidence: 87.50%)."
        }"#;

        let reply: PredictResponse = serde_json::from_str(json).unwrap();
        let prediction = reply.prediction.clone().unwrap();

        assert!(reply.success);
        assert_eq!(prediction.label, "Pneumonia");
        assert_eq!(prediction.confidence_percent(), "87.50%");
        assert!(!prediction.is_uncertain());
        assert!(reply.message().starts_with("Based on the uploaded image"));
    }

    #[test]
    fn test_parse_uncertain_prediction() {
        let json = r#"{
            "success": true,
            "prediction": {
                "class": "Uncertain",
                "confidence": 0.41,
                "description": "Low confidence. This may not be a medical image.",
                "source": "Mock Model (TensorFlow unavailable)"
            },
            "response": "I am not sure about this image."
        }"#;

        let reply: PredictResponse = serde_json::from_str(json).unwrap();
        assert!(reply.prediction.as_ref().unwrap().is_uncertain());
    }

    #[test]
    fn test_parse_error_reply() {
        let json = r#"{"success": false, "error": "Please upload a medical image."}"#;

        let reply: PredictResponse = serde_json::from_str(json).unwrap();
        assert!(!reply.success);
        assert!(reply.prediction.is_none());
        assert_eq!(reply.message(), "Please upload a medical image.");
    }

    #[test]
    fn test_message_falls_back_to_description() {
        let reply = PredictResponse {
            success: true,
            prediction: Some(Prediction {
                label: "Normal".to_string(),
                confidence: 0.9,
                description: "AI detected Normal with 90.00% confidence".to_string(),
                source: "Real Model".to_string(),
            }),
            response: None,
            error: None,
        };

        assert_eq!(reply.message(), "AI detected Normal with 90.00% confidence");
        let entry = ConversationEntry::from_prediction(reply);
        assert_eq!(entry.author, Author::Assistant);
        assert!(entry.prediction.is_some());
    }

    #[test]
    fn test_chat_request_body() {
        let body = serde_json::to_value(ChatRequest {
            message: "Is this normal?".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Is this normal?" }));
    }
}
