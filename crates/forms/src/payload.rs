//! # Payload Module
//!
//! Form data and the XML data document handed to the renderer:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?><form><customerName>John Doe</customerName>...</form>
//! ```

use crate::error::{FormsError, FormsResult};

const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const ROOT_ELEMENT: &str = "form";

/// A single field value, or every value of a repeated request parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FormValue {
    /// The value, or the first one for multi-valued fields
    pub fn first(&self) -> Option<&str> {
        match self {
            FormValue::Single(value) => Some(value.as_str()),
            FormValue::Multiple(values) => values.first().map(String::as_str),
        }
    }

    pub fn values(&self) -> Vec<&str> {
        match self {
            FormValue::Single(value) => vec![value.as_str()],
            FormValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Single(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::Single(value)
    }
}

impl From<Vec<String>> for FormValue {
    fn from(mut values: Vec<String>) -> Self {
        if values.len() == 1 {
            FormValue::Single(values.remove(0))
        } else {
            FormValue::Multiple(values)
        }
    }
}

/// Field name → value, in insertion order.
///
/// Inserting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, FormValue)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FormValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<FormValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Copies every field of `other`, replacing fields with the same name.
    pub fn extend_from(&mut self, other: &FormData) {
        for (name, value) in other.iter() {
            self.insert(name, value.clone());
        }
    }
}

impl<K: Into<String>, V: Into<FormValue>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = FormData::new();
        for (name, value) in iter {
            data.insert(name, value);
        }
        data
    }
}

/// Escapes the five XML special characters.
///
/// # Examples
/// ```
/// use securbank_forms::escape_xml;
///
/// assert_eq!(escape_xml("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
/// ```
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Field names become element names, so they must be valid XML names.
fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Builds the XML data document for the renderer.
///
/// Multi-valued fields produce one element per value.
pub fn build_xml_data(form_data: &FormData) -> FormsResult<String> {
    let mut xml = String::from(XML_PROLOG);
    xml.push_str(&format!("<{ROOT_ELEMENT}>"));

    for (name, value) in form_data.iter() {
        if !is_valid_element_name(name) {
            return Err(FormsError::InvalidFieldName(name.to_string()));
        }
        for item in value.values() {
            xml.push_str(&format!("<{name}>{}</{name}>", escape_xml(item)));
        }
    }

    xml.push_str(&format!("</{ROOT_ELEMENT}>"));
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b > c"), "a &lt; b &gt; c");
        assert_eq!(escape_xml("O'Brien"), "O&apos;Brien");
        assert_eq!(escape_xml("&amp;"), "&amp;amp;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_build_xml_data_order_and_escaping() {
        let data = FormData::new()
            .with("customerName", "John & Jane")
            .with("accountNumber", "1234-5678");

        let xml = build_xml_data(&data).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><form>\
             <customerName>John &amp; Jane</customerName>\
             <accountNumber>1234-5678</accountNumber></form>"
        );
    }

    #[test]
    fn test_build_xml_data_empty() {
        let xml = build_xml_data(&FormData::new()).unwrap();
        assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"UTF-8\"?><form></form>");
    }

    #[test]
    fn test_build_xml_data_multi_value() {
        let data = FormData::new().with(
            "beneficiary",
            vec!["Alice".to_string(), "Bob".to_string()],
        );
        let xml = build_xml_data(&data).unwrap();
        assert!(xml.contains("<beneficiary>Alice</beneficiary><beneficiary>Bob</beneficiary>"));
    }

    #[test]
    fn test_build_xml_data_rejects_bad_names() {
        for name in ["", "1st", "has space", "a<b", "-dash"] {
            let data = FormData::new().with(name, "x");
            assert!(
                matches!(build_xml_data(&data), Err(FormsError::InvalidFieldName(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_form_data_insert_replaces() {
        let mut data = FormData::new();
        data.insert("balance", "10.00");
        data.insert("currency", "USD");
        data.insert("balance", "20.00");

        assert_eq!(data.len(), 2);
        assert_eq!(data.get("balance").and_then(FormValue::first), Some("20.00"));
        let names: Vec<&str> = data.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["balance", "currency"]);
    }

    #[test]
    fn test_form_value_from_vec() {
        assert_eq!(
            FormValue::from(vec!["one".to_string()]),
            FormValue::Single("one".to_string())
        );
        let multi = FormValue::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(multi.first(), Some("a"));
        assert_eq!(multi.values(), vec!["a", "b"]);
    }

    #[test]
    fn test_form_data_from_iter_and_extend() {
        let mut data: FormData = [("a", "1"), ("b", "2")].into_iter().collect();
        let other = FormData::new().with("b", "3").with("c", "4");
        data.extend_from(&other);

        assert_eq!(data.len(), 3);
        assert_eq!(data.get("b").and_then(FormValue::first), Some("3"));
        assert!(data.contains("c"));
    }
}
