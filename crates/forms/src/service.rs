//! PDF generation on top of an external renderer
//!
//! [`OutputService`] is the seam to the forms renderer (template resolution,
//! data merge and PDF bytes all happen behind it). [`PdfGenerationService`]
//! prepares the inputs, calls it, and maps failures.

use crate::config::FormsConfig;
use crate::documents::FormDocument;
use crate::error::{FormsError, FormsResult, OutputServiceError};
use crate::payload::{build_xml_data, FormData};
use crate::request::{content_root, PdfRequest};
use crate::response::{ErrorResponse, PdfResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

/// What the renderer should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSource<'a> {
    /// Repository path of an XDP template
    Path(&'a str),
    /// Document content supplied inline (HTML, DOCX, ...)
    Inline(&'a [u8]),
}

/// Options passed alongside the template and data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Directory used to resolve resources referenced by the template
    pub content_root: String,
    /// MIME type of inline content, when known
    pub mime_type: Option<String>,
}

impl RenderOptions {
    pub fn for_template(template_path: &str) -> Self {
        Self {
            content_root: content_root(template_path).to_string(),
            mime_type: None,
        }
    }
}

/// External forms renderer.
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Merge `data` (an XML data document, possibly empty) into `template`
    /// and return the PDF bytes.
    async fn generate_pdf_output(
        &self,
        template: TemplateSource<'_>,
        data: &str,
        options: &RenderOptions,
    ) -> Result<Vec<u8>, OutputServiceError>;
}

const XDP_FAILURE: &str = "Failed to generate PDF from XDP template";
const FORM_FAILURE: &str = "Failed to render PDF form";
const HTML_FAILURE: &str = "Failed to generate PDF from HTML";
const CONVERT_FAILURE: &str = "Failed to convert document to PDF";

/// PDF generation service
pub struct PdfGenerationService {
    output: Arc<dyn OutputService>,
    config: FormsConfig,
}

impl PdfGenerationService {
    pub fn new(output: Arc<dyn OutputService>) -> Self {
        Self::with_config(output, FormsConfig::default())
    }

    pub fn with_config(output: Arc<dyn OutputService>, config: FormsConfig) -> Self {
        Self { output, config }
    }

    pub fn config(&self) -> &FormsConfig {
        &self.config
    }

    async fn render(
        &self,
        template: TemplateSource<'_>,
        data: &str,
        options: &RenderOptions,
        failure: &str,
    ) -> FormsResult<Vec<u8>> {
        self.output
            .generate_pdf_output(template, data, options)
            .await
            .map_err(|e| {
                error!(error = %e, "{failure}");
                FormsError::render(failure, e)
            })
    }

    /// Render an XDP template with key/value form data.
    pub async fn generate_pdf_from_xdp(
        &self,
        template_path: &str,
        form_data: &FormData,
    ) -> FormsResult<Vec<u8>> {
        info!(template = template_path, fields = form_data.len(), "Generating PDF from XDP template");

        let xml_data = build_xml_data(form_data)?;
        let options = RenderOptions::for_template(template_path);
        self.render(TemplateSource::Path(template_path), &xml_data, &options, XDP_FAILURE)
            .await
    }

    /// Render a form with an XML data document supplied by the caller.
    pub async fn render_pdf_form(&self, form_path: &str, xml_data: &str) -> FormsResult<Vec<u8>> {
        info!(form = form_path, "Rendering PDF form");

        let options = RenderOptions::for_template(form_path);
        self.render(TemplateSource::Path(form_path), xml_data, &options, FORM_FAILURE)
            .await
    }

    pub async fn generate_pdf_from_html(&self, html: &str) -> FormsResult<Vec<u8>> {
        info!(bytes = html.len(), "Generating PDF from HTML content");

        let options = RenderOptions {
            mime_type: Some("text/html".to_string()),
            ..RenderOptions::default()
        };
        self.render(TemplateSource::Inline(html.as_bytes()), "", &options, HTML_FAILURE)
            .await
    }

    pub async fn convert_to_pdf(&self, document: &[u8], mime_type: &str) -> FormsResult<Vec<u8>> {
        info!(mime_type, bytes = document.len(), "Converting document to PDF");

        let options = RenderOptions {
            mime_type: Some(mime_type.to_string()),
            ..RenderOptions::default()
        };
        self.render(TemplateSource::Inline(document), "", &options, CONVERT_FAILURE)
            .await
    }

    /// Render one of the canned documents.
    pub async fn generate_document(&self, document: &FormDocument) -> FormsResult<Vec<u8>> {
        self.generate_pdf_from_xdp(&document.template_path, &document.form_data)
            .await
    }

    /// Full request flow: parameters in, download or JSON error out.
    pub async fn handle<I>(&self, params: I) -> Result<PdfResponse, ErrorResponse>
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        match self.process(params).await {
            Ok(response) => {
                info!(filename = %response.filename, bytes = response.body.len(), "PDF generated successfully");
                Ok(response)
            }
            Err(e) => {
                if e.is_client_error() {
                    warn!(error = %e, "Rejected PDF request");
                } else {
                    error!(error = %e, "PDF request failed");
                }
                Err(ErrorResponse::from(e))
            }
        }
    }

    async fn process<I>(&self, params: I) -> FormsResult<PdfResponse>
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let request = PdfRequest::from_parameters(params, &self.config)?;
        let body = self
            .generate_pdf_from_xdp(&request.template_path, &request.form_data)
            .await?;
        Ok(PdfResponse::new(&request.filename, body))
    }
}
