//! # SecurBank Forms
//!
//! Marshals key/value form data into the XML data document consumed by an
//! external XDP/PDF renderer, and shapes the request and response around it.
//!
//! The renderer itself is not part of this crate; it is reached through the
//! [`OutputService`] trait.

pub mod config;
pub mod documents;
pub mod error;
pub mod payload;
pub mod request;
pub mod response;
pub mod service;

pub use config::FormsConfig;
pub use documents::FormDocument;
pub use error::{FormsError, FormsResult, OutputServiceError};
pub use payload::{build_xml_data, escape_xml, FormData, FormValue};
pub use request::{content_root, group_parameters, PdfRequest};
pub use response::{ErrorBody, ErrorResponse, PdfResponse};
pub use service::{OutputService, PdfGenerationService, RenderOptions, TemplateSource};
