//! User list domain
//!
//! Wraps [`roster_core::UserListState`] with the load status and the
//! directory service the list is fetched from.

pub mod messages;
pub mod update;

use std::sync::Arc;

use roster_core::{ListConfig, UserListState};

use crate::infra::services::user_directory::UserDirectory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

#[derive(Default)]
pub struct UserListDomainState {
    pub list: UserListState,
    pub load_status: LoadStatus,
    pub directory: Option<Arc<dyn UserDirectory>>,
}

impl UserListDomainState {
    pub fn new(config: ListConfig) -> Self {
        Self {
            list: UserListState::new(config),
            ..Self::default()
        }
    }
}

impl std::fmt::Debug for UserListDomainState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserListDomainState")
            .field("rows", &self.list.len())
            .field("view", self.list.view())
            .field("load_status", &self.load_status)
            .field("has_directory", &self.directory.is_some())
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct UserListDomain {
    pub state: UserListDomainState,
}

impl UserListDomain {
    pub fn new(state: UserListDomainState) -> Self {
        Self { state }
    }

    pub fn list(&self) -> &UserListState {
        &self.state.list
    }

    pub fn load_status(&self) -> LoadStatus {
        self.state.load_status
    }
}
