use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ReportError;

/// One vulnerability as the scanner reports it. Every field may be missing.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vulnerability {
    #[serde(default, deserialize_with = "text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub package_name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub version: Option<String>,
    /// Scanners emit either a single version or a list of them.
    #[serde(default, deserialize_with = "text")]
    pub fixed_in: Option<String>,
}

/// One scan result object.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
    #[serde(default, deserialize_with = "text")]
    pub project_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScanDocument {
    Many(Vec<ScanResult>),
    One(ScanResult),
}

/// Parses a document holding one scan object or an array of them.
pub fn parse_document(input: &str) -> Result<Vec<ScanResult>, ReportError> {
    let value: Value = serde_json::from_str(input)?;
    if !value.is_object() && !value.is_array() {
        return Err(ReportError::parse(
            "expected a scan object or an array of scan objects",
        ));
    }
    match serde_json::from_value(value)? {
        ScanDocument::Many(scans) => Ok(scans),
        ScanDocument::One(scan) => Ok(vec![scan]),
    }
}

/// Strings, numbers and lists of either become text; null and empty become `None`.
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(flatten(&value).filter(|s| !s.trim().is_empty()))
}

fn flatten(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(flatten).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Object(_) => None,
    }
}
