//! The root view builds in every load and notice state

use roster_admin::app::{AppConfig, bootstrap};
use roster_admin::common::messages::DomainMessage;
use roster_admin::domains::user_list::messages::Message;
use roster_admin::state::State;
use roster_admin::update::update;
use roster_admin::view::view;
use roster_core::{UserId, UserRecord};

fn loaded() -> State {
    let config = AppConfig::new("http://unused.invalid/members.json").with_test_stubs(true);
    let mut state = bootstrap::base_state(&config);
    let users = vec![
        UserRecord::new("1", "Aaron Miles", "aaron@mailinator.com", "member"),
        UserRecord::new("2", "Arvind Kumar", "arvind@mailinator.com", "admin"),
    ];
    let _ = update(&mut state, DomainMessage::from(Message::UsersLoaded(Ok(users))));
    state
}

#[test]
fn pending_state_renders_placeholder() {
    let state = State::default();
    let _ = view(&state);
}

#[test]
fn editing_row_with_notice_renders() {
    let mut state = loaded();
    let _ = update(&mut state, Message::EditRequested(UserId::from("2")).into());
    let _ = update(&mut state, Message::DeleteSelectedRequested.into());

    assert!(state.domains.feedback.notice().is_some());
    let _ = view(&state);
}
