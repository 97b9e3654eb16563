//! Request handling settings

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormsConfig {
    pub template_param: String,
    pub filename_param: String,
    pub default_filename: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            template_param: "template".to_string(),
            filename_param: "filename".to_string(),
            default_filename: "generated-document.pdf".to_string(),
        }
    }
}

impl FormsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_filename(mut self, filename: &str) -> Self {
        self.default_filename = filename.to_string();
        self
    }

    pub fn with_template_param(mut self, name: &str) -> Self {
        self.template_param = name.to_string();
        self
    }

    pub fn with_filename_param(mut self, name: &str) -> Self {
        self.filename_param = name.to_string();
        self
    }

    /// System parameters are never copied into form data
    pub fn is_reserved(&self, name: &str) -> bool {
        name == self.template_param || name == self.filename_param
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FormsConfig::default();
        assert_eq!(config.default_filename, "generated-document.pdf");
        assert!(config.is_reserved("template"));
        assert!(config.is_reserved("filename"));
        assert!(!config.is_reserved("customerName"));
    }

    #[test]
    fn test_builder() {
        let config = FormsConfig::new()
            .with_default_filename("statement.pdf")
            .with_template_param("xdp");
        assert_eq!(config.default_filename, "statement.pdf");
        assert!(config.is_reserved("xdp"));
        assert!(!config.is_reserved("template"));
    }
}
