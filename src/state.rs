use crate::config::AppConfig;
use crate::services::extractor::SlotExtractor;
use crate::services::search::DiscoveryProvider;
use crate::services::speech::SpeechProvider;
use crate::services::storage::BlobStorage;

pub struct AppState {
    pub config: AppConfig,
    pub extractor: SlotExtractor,
    pub speech: Box<dyn SpeechProvider>,
    pub storage: Box<dyn BlobStorage>,
    pub search: Box<dyn DiscoveryProvider>,
}
