use std::sync::Arc;

use directory::DirectoryClient;

use crate::config::Settings;

#[derive(Clone)]
pub struct AppState {
    directory_client: Arc<DirectoryClient>,
}

impl AppState {
    pub fn new(config: &Settings) -> Self {
        Self {
            directory_client: Arc::new(DirectoryClient::new(config.directory.base_url.clone())),
        }
    }

    pub fn directory_client(&self) -> &DirectoryClient {
        &self.directory_client
    }
}
