//! PDF render requests built from raw request parameters

use crate::config::FormsConfig;
use crate::error::{FormsError, FormsResult};
use crate::payload::FormData;

/// Groups `name=value` pairs by name, keeping first-seen order.
///
/// Repeated names collect all of their values, the way a query string or a
/// form body carries multi-valued fields.
pub fn group_parameters<I, K, V>(pairs: I) -> Vec<(String, Vec<String>)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
    for (name, value) in pairs {
        let name = name.into();
        let value = value.into();
        match grouped.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, values)) => values.push(value),
            None => grouped.push((name, vec![value])),
        }
    }
    grouped
}

/// Directory part of a template path, handed to the renderer as its content
/// root. A path without `/` has an empty root.
///
/// # Examples
/// ```
/// use securbank_forms::content_root;
///
/// assert_eq!(content_root("/content/dam/forms/statement.xdp"), "/content/dam/forms");
/// assert_eq!(content_root("statement.xdp"), "");
/// ```
pub fn content_root(template_path: &str) -> &str {
    template_path
        .rfind('/')
        .map_or("", |index| &template_path[..index])
}

fn first_non_blank(values: &[String]) -> Option<&str> {
    values
        .first()
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
}

/// A validated request to render an XDP template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfRequest {
    pub template_path: String,
    pub filename: String,
    pub form_data: FormData,
}

impl PdfRequest {
    /// Build a request from grouped parameters.
    ///
    /// The template parameter is required; the filename falls back to the
    /// configured default. Every other parameter with at least one value
    /// becomes a form field.
    pub fn from_parameters<I>(params: I, config: &FormsConfig) -> FormsResult<Self>
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut template_path = None;
        let mut filename = None;
        let mut form_data = FormData::new();

        for (name, values) in params {
            if name == config.template_param {
                template_path = first_non_blank(&values).map(str::to_string);
            } else if name == config.filename_param {
                filename = first_non_blank(&values).map(str::to_string);
            } else if !values.is_empty() {
                form_data.insert(name, values);
            }
        }

        let template_path = template_path.ok_or(FormsError::MissingTemplate)?;
        Ok(Self {
            template_path,
            filename: filename.unwrap_or_else(|| config.default_filename.clone()),
            form_data,
        })
    }

    pub fn content_root(&self) -> &str {
        content_root(&self.template_path)
    }
}
