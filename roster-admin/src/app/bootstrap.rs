use std::sync::Arc;

use iced::Task;
use roster_core::ListConfig;

use crate::common::messages::DomainMessage;
use crate::domains::user_list::messages::Message as UserListMessage;
use crate::infra::api_client::ApiClient;
use crate::infra::config::Config;
use crate::infra::services::user_directory::{HttpUserDirectory, UserDirectory};
use crate::infra::testing::stubs::StaticUserDirectory;
use crate::state::State;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub source_url: Arc<str>,
    pub list: ListConfig,
    pub use_test_stubs: bool,
}

impl AppConfig {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: Arc::from(source_url.into()),
            list: ListConfig::default(),
            use_test_stubs: false,
        }
    }

    /// Settings file plus `ROSTER_*` environment overrides.
    pub fn from_environment() -> Self {
        let config = Config::load();
        let use_test_stubs = std::env::var("ROSTER_USE_STUBS")
            .map(|value| {
                matches!(
                    value.trim().to_ascii_lowercase().as_str(),
                    "1" | "true" | "yes"
                )
            })
            .unwrap_or(false);

        Self {
            source_url: Arc::from(config.source_url),
            list: config.list,
            use_test_stubs,
        }
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn use_test_stubs(&self) -> bool {
        self.use_test_stubs
    }

    pub fn with_test_stubs(mut self, enabled: bool) -> Self {
        self.use_test_stubs = enabled;
        self
    }

    pub fn with_list_config(mut self, list: ListConfig) -> Self {
        self.list = list;
        self
    }
}

fn directory_for(config: &AppConfig) -> Option<Arc<dyn UserDirectory>> {
    if config.use_test_stubs() {
        log::info!("Using the built-in sample directory instead of the feed");
        return Some(Arc::new(StaticUserDirectory::sample()));
    }

    match ApiClient::new() {
        Ok(client) => Some(Arc::new(HttpUserDirectory::new(
            Arc::new(client),
            config.source_url(),
        ))),
        Err(err) => {
            log::error!("Failed to create HTTP client: {:#}", err);
            None
        }
    }
}

/// State before anything has been fetched.
pub fn base_state(config: &AppConfig) -> State {
    let mut state = State::new(config.list);
    state.domains.user_list.state.directory = directory_for(config);
    state
}

/// Boot logic for the running application: the initial state plus the one
/// fetch of the member feed.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<DomainMessage>) {
    let state = base_state(config);
    (
        state,
        Task::done(DomainMessage::from(UserListMessage::LoadUsers)),
    )
}
