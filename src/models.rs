use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One submitted reading, as returned by the sheet endpoint.
///
/// The sheet rows are filled in by students and the endpoint does no
/// validation, so `level` is accepted as whatever JSON value the row
/// carries and normalized to 0.0 when it is not a finite number.
#[derive(Debug, Clone, Deserialize)]
pub struct Reading {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_level")]
    pub level: f64,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub timestamp: String,
}

fn lenient_level<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|level| level.is_finite()).unwrap_or(0.0))
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: i64,
    #[serde(default)]
    pub keywords: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub recorded: String,
}

#[derive(Debug, Serialize)]
pub struct RecentEntry {
    pub timestamp: String,
    pub name: String,
    pub level: f64,
    pub keywords: String,
}

#[derive(Debug, Serialize)]
pub struct GaugeResponse {
    pub participant_count: usize,
    pub average: f64,
    pub fill_percent: f64,
    pub status: String,
    pub mission: String,
    pub recent: Vec<RecentEntry>,
}
