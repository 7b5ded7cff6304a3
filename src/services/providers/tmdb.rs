/// TMDB catalog provider
///
/// Thin client over the TMDB v3 REST API. Every resource is a GET against
/// `{api_url}/{path}` with the API key appended as a query parameter.
/// Responses are classified structurally: HTTP 404 becomes `NotFound`, any
/// other non-success status becomes `Upstream`. No retries, no timeouts.
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::CatalogPage,
    services::providers::CatalogProvider,
};

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    /// Maps a non-success upstream status onto the error taxonomy
    fn classify_status(status: StatusCode, body: &str) -> AppError {
        if status == StatusCode::NOT_FOUND {
            AppError::NotFound(format!("catalog returned status {}", status))
        } else {
            AppError::Upstream(format!("catalog returned status {}: {}", status, body))
        }
    }

    async fn get(&self, path: &str) -> AppResult<Value> {
        let url = format!("{}/{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify_status(status, &body));
        }

        let value: Value = response.json().await?;
        Ok(value)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn fetch_value(&self, path: &str) -> AppResult<Value> {
        let value = self.get(path).await?;
        tracing::debug!(path = %path, "Catalog resource fetched");
        Ok(value)
    }

    async fn fetch_page(&self, path: &str) -> AppResult<CatalogPage> {
        let value = self.get(path).await?;
        let page: CatalogPage = serde_json::from_value(value)
            .map_err(|e| AppError::Upstream(format!("unexpected page shape: {}", e)))?;

        tracing::debug!(
            path = %path,
            page = page.page,
            results = page.results.len(),
            "Catalog page fetched"
        );

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status_404_is_not_found() {
        let err = TmdbProvider::classify_status(StatusCode::NOT_FOUND, "");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_classify_status_other_is_upstream() {
        for status in [
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::UNAUTHORIZED,
            StatusCode::TOO_MANY_REQUESTS,
        ] {
            let err = TmdbProvider::classify_status(status, "boom");
            assert!(matches!(err, AppError::Upstream(_)), "status {}", status);
        }
    }

    #[test]
    fn test_upstream_error_carries_status_and_body() {
        let err = TmdbProvider::classify_status(StatusCode::BAD_GATEWAY, "gateway down");
        let message = err.to_string();
        assert!(message.contains("502"));
        assert!(message.contains("gateway down"));
    }

    #[test]
    fn test_page_deserialization_tolerates_missing_fields() {
        let page: CatalogPage = serde_json::from_value(serde_json::json!({
            "results": [{"id": 1, "original_language": "en"}]
        }))
        .unwrap();
        assert_eq!(page.page, 0);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.total_pages, 0);
    }
}
