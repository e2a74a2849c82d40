use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient, TextSplitter};
use crate::application::services::UploadService;
use crate::presentation::config::Settings;

/// Everything a request handler needs, built once at startup and shared
/// read-only across requests.
pub struct AppState<F, L, T: ?Sized>
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter,
{
    pub upload_service: Arc<UploadService<F, L, T>>,
    pub settings: Arc<Settings>,
}

impl<F, L, T: ?Sized> Clone for AppState<F, L, T>
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter,
{
    fn clone(&self) -> Self {
        Self {
            upload_service: Arc::clone(&self.upload_service),
            settings: Arc::clone(&self.settings),
        }
    }
}
