//! HTTP client for the property-management REST backend.
//!
//! Every method is one request/response round trip; list responses pass
//! through the normalization layer in `models` before reaching the caller.

use crate::api::models::{
    DashboardStats, Property, TenantPage, TenantPayload, TransactionReport, normalize_count,
    normalize_property_list, normalize_tenant_page,
};
use crate::config::Config;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Failure of a backend call.
///
/// Call sites collapse every variant into one status-line notification
/// naming the failed operation; the distinction exists for tests and logs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or transport failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx server response
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// Response body was not the JSON we expected
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Client for the property-management API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client for API requests
    http: Client,
    /// Base URL of the backend, without a trailing slash
    base_url: String,
}

impl ApiClient {
    /// Create a new client from configuration.
    pub fn new(config: &Config) -> ApiResult<Self> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON body, turning non-2xx responses and undecodable bodies
    /// into their respective error variants.
    async fn get_value(&self, path: &str, query: &[(&str, String)]) -> ApiResult<Value> {
        let response = self.http.get(self.url(path)).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn expect_success(response: reqwest::Response) -> ApiResult<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Status { status, body })
        }
    }

    /// Fetch one page of tenants.
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    /// * `per_page` - Page size
    pub async fn fetch_tenants(&self, page: u32, per_page: u32) -> ApiResult<TenantPage> {
        let query = [
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ];
        let value = self.get_value("/api/tenants", &query).await?;
        Ok(normalize_tenant_page(value))
    }

    /// Fetch the property set for the selector, up to 1000 in one request.
    pub async fn fetch_properties(&self) -> ApiResult<Vec<Property>> {
        let query = [("page", "1".to_string()), ("per_page", "1000".to_string())];
        let value = self.get_value("/api/properties", &query).await?;
        Ok(normalize_property_list(value))
    }

    /// Create a tenant; the identifier is assigned server-side.
    pub async fn create_tenant(&self, payload: &TenantPayload) -> ApiResult<()> {
        let response = self
            .http
            .post(self.url("/api/tenants"))
            .json(payload)
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// Update a tenant by identifier with the full field set.
    pub async fn update_tenant(&self, id: i64, payload: &TenantPayload) -> ApiResult<()> {
        let response = self
            .http
            .put(self.url(&format!("/api/tenants/{id}")))
            .json(payload)
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// Delete a tenant by identifier.
    pub async fn delete_tenant(&self, id: i64) -> ApiResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/tenants/{id}")))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// Fetch the record counts shown on the dashboard.
    ///
    /// # Details
    /// Three unpaged list calls; counts are taken from `total` metadata when
    /// present, otherwise from the sequence length.
    pub async fn fetch_stats(&self) -> ApiResult<DashboardStats> {
        let tenants = self.get_value("/api/tenants", &[]).await?;
        let properties = self.get_value("/api/properties", &[]).await?;
        let transactions = self.get_value("/api/transactions", &[]).await?;
        Ok(DashboardStats {
            tenants: normalize_count(&tenants, "tenants"),
            properties: normalize_count(&properties, "properties"),
            transactions: normalize_count(&transactions, "transactions"),
        })
    }

    /// Fetch all transactions for one tenant plus the running balance.
    pub async fn fetch_tenant_transactions(&self, tenant_id: i64) -> ApiResult<TransactionReport> {
        let value = self
            .get_value(&format!("/api/tenants/{tenant_id}/transactions"), &[])
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Download the database backup artifact as raw bytes.
    pub async fn download_backup(&self) -> ApiResult<Vec<u8>> {
        let response = self.http.get(self.url("/api/backup")).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_client_new() {
        let config = Config::default();
        assert!(ApiClient::new(&config).is_ok());
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let config = Config {
            base_url: "http://localhost:5000/".to_string(),
            ..Config::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.url("/api/tenants"), "http://localhost:5000/api/tenants");
    }
}
