use async_trait::async_trait;

use super::BlobStorage;
use crate::errors::AppError;

pub struct SupabaseStorage {
    base_url: String,
    service_role_key: String,
    bucket: String,
    client: reqwest::Client,
}

impl SupabaseStorage {
    pub fn new(base_url: String, service_role_key: String, bucket: String) -> Self {
        Self {
            base_url,
            service_role_key,
            bucket,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl BlobStorage for SupabaseStorage {
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), AppError> {
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, key
        );

        // x-upsert replaces any existing object in one call, so concurrent
        // writers can never observe a deleted-but-not-reuploaded key.
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.service_role_key)
            .header("x-upsert", "true")
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| AppError::StorageWriteFailed(format!("failed to call storage API: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(AppError::StorageWriteFailed(format!(
                "storage API error ({status}): {detail}"
            )));
        }

        Ok(())
    }
}
