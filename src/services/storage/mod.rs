pub mod supabase;

use async_trait::async_trait;

use crate::errors::AppError;

#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Store an object under `key`, replacing any existing object in a
    /// single atomic overwrite.
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), AppError>;
}
