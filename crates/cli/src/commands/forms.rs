//! Form data command
//!
//! Builds the XML data document and download headers a render would use,
//! without calling a renderer.

use anyhow::{bail, Context, Result};
use securbank_forms::{build_xml_data, group_parameters, FormsConfig, PdfRequest, PdfResponse};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

use super::to_json;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FormDataSummary {
    template: String,
    content_root: String,
    filename: String,
    fields: usize,
    headers: BTreeMap<&'static str, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    xml: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    written_to: Option<String>,
}

/// Split `KEY=VALUE`; the value may itself contain `=`.
fn parse_field(field: &str) -> Result<(String, String)> {
    match field.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => bail!("Invalid field {field:?}, expected KEY=VALUE"),
    }
}

/// Collect the command-line inputs into request parameters, the same shape
/// an HTTP query string would produce.
fn collect_parameters(
    template: Option<&str>,
    filename: Option<&str>,
    fields: &[String],
    config: &FormsConfig,
) -> Result<Vec<(String, Vec<String>)>> {
    let mut pairs = Vec::with_capacity(fields.len() + 2);
    if let Some(template) = template {
        pairs.push((config.template_param.clone(), template.to_string()));
    }
    if let Some(filename) = filename {
        pairs.push((config.filename_param.clone(), filename.to_string()));
    }
    for field in fields {
        let (key, value) = parse_field(field)?;
        if config.is_reserved(&key) {
            bail!("Field {key:?} is reserved, use --{key} instead");
        }
        pairs.push((key, value));
    }
    Ok(group_parameters(pairs))
}

pub fn form_data(
    template: Option<&str>,
    filename: Option<&str>,
    fields: &[String],
    output: Option<&Path>,
    json: bool,
) -> Result<String> {
    let config = FormsConfig::default();
    let params = collect_parameters(template, filename, fields, &config)?;
    let request = PdfRequest::from_parameters(params, &config)?;
    let xml = build_xml_data(&request.form_data)?;

    let written_to = match output {
        Some(path) => {
            fs::write(path, &xml)
                .with_context(|| format!("Failed to write form data to {}", path.display()))?;
            info!(path = %path.display(), bytes = xml.len(), "Wrote form data");
            Some(path.display().to_string())
        }
        None => None,
    };

    let headers: BTreeMap<&'static str, String> =
        PdfResponse::new(&request.filename, Vec::new()).headers().into_iter().collect();

    let summary = FormDataSummary {
        template: request.template_path.clone(),
        content_root: request.content_root().to_string(),
        filename: request.filename.clone(),
        fields: request.form_data.len(),
        headers,
        xml: written_to.is_none().then(|| xml.clone()),
        written_to,
    };

    if json {
        return to_json(&summary);
    }

    let mut text = format!(
        "Template:     {}\nContent root: {}\nFilename:     {}\nFields:       {}",
        summary.template, summary.content_root, summary.filename, summary.fields
    );
    match &summary.written_to {
        Some(path) => text.push_str(&format!("\nWritten to:   {path}")),
        None => text.push_str(&format!("\n\n{xml}")),
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_field("empty=").unwrap(),
            ("empty".to_string(), String::new())
        );
        assert!(parse_field("novalue").is_err());
        assert!(parse_field("=x").is_err());
    }

    #[test]
    fn test_form_data_to_stdout() {
        let output = form_data(
            Some("/content/dam/forms/statement.xdp"),
            None,
            &fields(&["customerName=John & Jane", "balance=5000.00"]),
            None,
            false,
        )
        .unwrap();

        assert!(output.contains("Content root: /content/dam/forms"));
        assert!(output.contains("Filename:     generated-document.pdf"));
        assert!(output.contains("<customerName>John &amp; Jane</customerName>"));
    }

    #[test]
    fn test_form_data_json() {
        let output = form_data(
            Some("/forms/t.xdp"),
            Some("t.pdf"),
            &fields(&["tag=a", "tag=b"]),
            None,
            true,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["filename"], "t.pdf");
        assert_eq!(value["fields"], 1);
        assert_eq!(
            value["headers"]["Content-Disposition"],
            "attachment; filename=\"t.pdf\""
        );
        assert!(value["xml"]
            .as_str()
            .unwrap()
            .contains("<tag>a</tag><tag>b</tag>"));
    }

    #[test]
    fn test_form_data_missing_template() {
        let err = form_data(None, None, &fields(&["a=1"]), None, false).unwrap_err();
        assert_eq!(err.to_string(), "Template path parameter is required");
    }

    #[test]
    fn test_form_data_reserved_field() {
        let err = form_data(None, None, &fields(&["template=/t.xdp"]), None, false).unwrap_err();
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn test_form_data_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.xml");

        let output = form_data(
            Some("/forms/t.xdp"),
            None,
            &fields(&["accountNumber=1234-5678"]),
            Some(&path),
            false,
        )
        .unwrap();

        assert!(output.contains("Written to:"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<?xml"));
        assert!(written.contains("<accountNumber>1234-5678</accountNumber>"));
    }
}
