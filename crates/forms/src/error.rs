//! Forms layer errors

use thiserror::Error;

/// Errors reported by an [`OutputService`](crate::OutputService) implementation.
#[derive(Debug, Error)]
pub enum OutputServiceError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Rendering failed: {0}")]
    Rendering(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Forms operation errors
#[derive(Debug, Error)]
pub enum FormsError {
    // === Request errors ===
    #[error("Template path parameter is required")]
    MissingTemplate,

    #[error("Invalid form field name: {0:?}")]
    InvalidFieldName(String),

    // === Renderer errors ===
    #[error("{message}")]
    Render {
        message: String,
        #[source]
        source: OutputServiceError,
    },
}

/// Result type alias for forms operations
pub type FormsResult<T> = Result<T, FormsError>;

impl FormsError {
    /// Wrap a renderer failure with the operation that was attempted
    pub fn render(message: &str, source: OutputServiceError) -> Self {
        Self::Render {
            message: message.to_string(),
            source,
        }
    }

    /// Caller errors map to 400, renderer failures to 500
    pub fn status_code(&self) -> u16 {
        match self {
            FormsError::MissingTemplate | FormsError::InvalidFieldName(_) => 400,
            FormsError::Render { .. } => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_missing_template_display() {
        let err = FormsError::MissingTemplate;
        assert_eq!(err.to_string(), "Template path parameter is required");
        assert_eq!(err.status_code(), 400);
        assert!(err.is_client_error());
    }

    #[test]
    fn test_render_error_keeps_source() {
        let err = FormsError::render(
            "Failed to generate PDF from XDP template",
            OutputServiceError::TemplateNotFound("/content/dam/missing.xdp".to_string()),
        );
        assert_eq!(err.to_string(), "Failed to generate PDF from XDP template");
        assert_eq!(err.status_code(), 500);
        assert!(!err.is_client_error());
        assert!(err
            .source()
            .unwrap()
            .to_string()
            .contains("/content/dam/missing.xdp"));
    }
}
