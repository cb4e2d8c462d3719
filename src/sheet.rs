use crate::errors::AppError;
use crate::models::Reading;
use std::env;
use tracing::{error, warn};

/// Placeholder; operators point `SHEET_URL` at their own deployed web app.
pub const DEFAULT_SHEET_URL: &str = "https://script.google.com/macros/s/DEPLOYMENT_ID/exec";

/// Client for the spreadsheet-backed web app that stores the readings.
///
/// The endpoint is the sole source of truth: nothing is cached here, and
/// every gauge render re-fetches the full history.
#[derive(Clone)]
pub struct SheetClient {
    http: reqwest::Client,
    base_url: String,
}

impl SheetClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// GET `?action=getAllData`, returning every recorded reading.
    pub async fn fetch_all(&self) -> Result<Vec<Reading>, AppError> {
        let url = format!("{}?action=getAllData", self.base_url);
        let response = self.http.get(&url).send().await.map_err(|err| {
            error!("sheet fetch failed: {err}");
            AppError::bad_gateway("could not load readings from the sheet")
        })?;
        let body = response.text().await.map_err(|err| {
            error!("sheet fetch body read failed: {err}");
            AppError::bad_gateway("could not load readings from the sheet")
        })?;

        Ok(parse_readings(&body))
    }

    /// POST one reading as form-encoded fields, matching the web app's
    /// `doPost` contract. Any non-2xx status is a failure; nothing retries.
    pub async fn submit(&self, name: &str, level: i64, keywords: &str) -> Result<(), AppError> {
        let form = [
            ("name", name.to_string()),
            ("level", level.to_string()),
            ("keywords", keywords.to_string()),
        ];
        let response = self
            .http
            .post(&self.base_url)
            .form(&form)
            .send()
            .await
            .map_err(|err| {
                error!("sheet submit failed: {err}");
                AppError::bad_gateway("could not reach the sheet to record the reading")
            })?;

        if !response.status().is_success() {
            error!("sheet submit rejected: {}", response.status());
            return Err(AppError::bad_gateway("the sheet refused to record the reading"));
        }

        Ok(())
    }
}

pub fn resolve_sheet_url() -> String {
    env::var("SHEET_URL").unwrap_or_else(|_| DEFAULT_SHEET_URL.to_string())
}

/// The web app serves its JSON with a text content type, so the body is read
/// as text and parsed here. A body that is not a JSON array of readings is
/// treated as an empty history rather than an error.
pub fn parse_readings(body: &str) -> Vec<Reading> {
    match serde_json::from_str(body) {
        Ok(readings) => readings,
        Err(err) => {
            warn!("sheet body is not a reading array: {err}");
            Vec::new()
        }
    }
}
