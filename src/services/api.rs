use crate::config::Config;
use crate::models::{
    cases::{CaseHistory, CaseSummary, DailyRecord},
    error::AppError,
};
use reqwest::StatusCode;

// CASES CLIENT
/// HTTP client for the county case time series.
pub struct CasesClient {
    http: reqwest::Client,
    url: String,
}

impl CasesClient {
    /// Creates a client for the endpoint at `url`.
    pub fn new(url: impl Into<String>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ApiError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// Fetches the whole daily series in one request.
    pub async fn fetch_history(&self) -> Result<CaseHistory, AppError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::ApiError(format!("Request to {} failed: {e}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }

        let records: Vec<DailyRecord> = response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))?;
        Ok(CaseHistory::new(records))
    }
}

/// Maps a non-success status onto the error shown to the user.
fn status_error(status: StatusCode, body: &str) -> AppError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => AppError::RateLimited,
        StatusCode::NOT_FOUND => AppError::NotFound(body.to_string()),
        _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
    }
}

/// Fetches the series from the configured endpoint and derives the summary.
pub async fn fetch_case_summary() -> Result<CaseSummary, AppError> {
    CasesClient::new(Config::DATA_URL)?
        .fetch_history()
        .await?
        .summarize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_for_any_url() {
        assert!(CasesClient::new(Config::DATA_URL).is_ok());
        assert!(CasesClient::new("http://localhost:8080/covid").is_ok());
    }

    #[test]
    fn test_rate_limit_and_missing_status() {
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, ""),
            AppError::RateLimited
        ));
        assert_eq!(
            status_error(StatusCode::NOT_FOUND, "gone").to_string(),
            "Not found: gone"
        );
    }

    #[test]
    fn test_other_statuses_are_api_errors() {
        let error = status_error(StatusCode::BAD_GATEWAY, "upstream");
        assert!(matches!(error, AppError::ApiError(_)));
        assert_eq!(
            error.to_string(),
            "API error: Unexpected status 502 Bad Gateway: upstream"
        );
    }
}
