use roster_core::ListConfig;

use crate::domains::Domains;
use crate::domains::user_list::{UserListDomain, UserListDomainState};

/// Everything the running application owns. Mutated only by
/// [`crate::update::update`].
#[derive(Debug, Default)]
pub struct State {
    pub domains: Domains,
}

impl State {
    pub fn new(config: ListConfig) -> Self {
        Self {
            domains: Domains {
                user_list: UserListDomain::new(UserListDomainState::new(config)),
                ..Domains::default()
            },
        }
    }
}
