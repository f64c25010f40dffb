use async_trait::async_trait;

use super::DiscoveryProvider;
use crate::errors::AppError;

pub struct TmdbProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TmdbProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DiscoveryProvider for TmdbProvider {
    async fn discover_tv(&self, year: &str, page: &str) -> Result<serde_json::Value, AppError> {
        let resp = self
            .client
            .get(format!("{}/3/discover/tv", self.base_url))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("first_air_date_year", year),
                ("sort_by", "popularity.desc"),
                ("page", page),
            ])
            .send()
            .await
            .map_err(|_| AppError::UpstreamUnavailable(502))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::UpstreamUnavailable(status.as_u16()));
        }

        resp.json()
            .await
            .map_err(|_| AppError::UpstreamUnavailable(502))
    }
}
