//! Response shapes for an HTTP layer in front of the renderer

use crate::error::FormsError;
use serde::{Deserialize, Serialize};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A rendered PDF ready to stream as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfResponse {
    pub filename: String,
    pub body: Vec<u8>,
}

impl PdfResponse {
    pub fn new(filename: &str, body: Vec<u8>) -> Self {
        Self {
            filename: filename.to_string(),
            body,
        }
    }

    /// Attachment download headers; caching is disabled.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Content-Type", PDF_CONTENT_TYPE.to_string()),
            (
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", self.filename),
            ),
            (
                "Cache-Control",
                "no-cache, no-store, must-revalidate".to_string(),
            ),
            ("Pragma", "no-cache".to_string()),
            ("Expires", "0".to_string()),
        ]
    }
}

/// JSON error body, `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// An error status with its JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: u16,
    pub body: ErrorBody,
}

impl ErrorResponse {
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.body).unwrap_or_else(|_| r#"{"error":"unknown"}"#.to_string())
    }
}

impl From<&FormsError> for ErrorResponse {
    fn from(err: &FormsError) -> Self {
        Self {
            status: err.status_code(),
            body: ErrorBody {
                error: err.to_string(),
            },
        }
    }
}

impl From<FormsError> for ErrorResponse {
    fn from(err: FormsError) -> Self {
        Self::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OutputServiceError;

    #[test]
    fn test_pdf_response_headers() {
        let response = PdfResponse::new("statement.pdf", b"%PDF-1.7".to_vec());
        let headers = response.headers();

        assert!(headers.contains(&("Content-Type", "application/pdf".to_string())));
        assert!(headers.contains(&(
            "Content-Disposition",
            "attachment; filename=\"statement.pdf\"".to_string()
        )));
        assert!(headers.contains(&("Expires", "0".to_string())));
    }

    #[test]
    fn test_missing_template_error_response() {
        let response = ErrorResponse::from(FormsError::MissingTemplate);
        assert_eq!(response.status, 400);
        assert_eq!(
            response.to_json(),
            r#"{"error":"Template path parameter is required"}"#
        );
    }

    #[test]
    fn test_render_error_response_escapes_message() {
        let err = FormsError::render(
            "Failed to \"render\"",
            OutputServiceError::Rendering("boom".to_string()),
        );
        let response = ErrorResponse::from(&err);
        assert_eq!(response.status, 500);

        let parsed: ErrorBody = serde_json::from_str(&response.to_json()).unwrap();
        assert_eq!(parsed.error, "Failed to \"render\"");
    }
}
