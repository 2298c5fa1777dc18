//! Domain modules: each owns a slice of [`crate::state::State`] and the
//! messages that change it.

pub mod feedback;
pub mod ui;
pub mod user_list;

use feedback::FeedbackDomain;
use user_list::UserListDomain;

#[derive(Debug, Default)]
pub struct Domains {
    pub user_list: UserListDomain,
    pub feedback: FeedbackDomain,
}
