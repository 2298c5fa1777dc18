//! UserListState behaviour over a feed-shaped fixture.
//!
//! Covers the rules the admin table depends on:
//! - search filters before pagination and counts pages from the filtered set
//! - only one row is editable at a time; save commits exactly what changed
//! - deletes keep the selection consistent with the collection

use roster_core::{
    EmptySelectionPolicy, ListConfig, ListError, PageRequest, SelectAllScope,
    UserField, UserId, UserListState, UserRecord,
};

const FEED: &str = r#"[
  {"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"},
  {"id":"2","name":"Aishwarya Naik","email":"aishwarya@mailinator.com","role":"member"},
  {"id":"3","name":"Arvind Kumar","email":"arvind@mailinator.com","role":"admin"},
  {"id":"4","name":"Caterina Binotto","email":"caterina@mailinator.com","role":"member"},
  {"id":"5","name":"Chetan Kumar","email":"chetan@mailinator.com","role":"member"},
  {"id":6,"name":"Jim McClain","email":"jim@mailinator.com","role":"member"},
  {"id":7,"name":"Mahaveer Singh","email":"mahaveer@mailinator.com","role":"member"}
]"#;

fn feed() -> Vec<UserRecord> {
    serde_json::from_str(FEED).expect("fixture parses")
}

fn list(page_size: usize) -> UserListState {
    let config = ListConfig::default()
        .with_page_size(page_size)
        .expect("non-zero page size");
    UserListState::with_records(config, feed())
}

fn id(raw: &str) -> UserId {
    UserId::from(raw)
}

fn visible_ids(state: &UserListState) -> Vec<String> {
    state
        .visible_rows()
        .iter()
        .map(|row| row.id().to_string())
        .collect()
}

#[test]
fn numeric_and_string_ids_load_alike() {
    let state = list(15);
    assert_eq!(state.len(), 7);
    assert!(state.row(&id("6")).is_some());
}

#[test]
fn total_pages_follow_filtered_count() {
    let mut state = list(2);
    assert_eq!(state.total_pages(), 4);

    state.set_search_input("kumar");
    assert_eq!(state.filtered_len(), 2);
    assert_eq!(state.total_pages(), 1);

    state.set_search_input("nobody");
    assert_eq!(state.total_pages(), 0);
    assert_eq!(state.current_page(), 1);
    assert!(state.visible_rows().is_empty());
}

#[test]
fn search_then_paginate() {
    let mut state = list(2);
    state.set_search_input("MEMBER");
    state.submit_search();
    assert_eq!(visible_ids(&state), vec!["1", "2"]);
    state.go_to(PageRequest::Next).unwrap();
    assert_eq!(visible_ids(&state), vec!["4", "5"]);
    state.go_to(PageRequest::Last).unwrap();
    assert_eq!(visible_ids(&state), vec!["6", "7"]);
    assert!(!state.pager().has_next());
    assert!(state.pager().has_previous());
}

#[test]
fn submit_search_returns_to_first_page() {
    let mut state = list(2);
    state.go_to(PageRequest::Number(3)).unwrap();
    state.submit_search();
    assert_eq!(state.current_page(), 1);
}

#[test]
fn editing_is_mutually_exclusive() {
    let mut state = list(15);
    state.begin_edit(&id("1")).unwrap();
    state
        .edit_field(&id("1"), UserField::Name, "Aaron M.")
        .unwrap();
    state.begin_edit(&id("2")).unwrap();

    let first = state.row(&id("1")).unwrap();
    assert!(!first.is_editing());
    assert!(first.edits().is_empty());
    assert_eq!(first.record().name, "Aaron Miles");
    assert!(state.row(&id("2")).unwrap().is_editing());
    assert_eq!(state.editing_row().map(|row| row.id().clone()), Some(id("2")));
}

#[test]
fn save_commits_only_touched_fields() {
    let mut state = list(15);
    let before = state.row(&id("3")).unwrap().record().clone();

    state.begin_edit(&id("3")).unwrap();
    state
        .edit_field(&id("3"), UserField::Role, "member")
        .unwrap();
    let written = state.save(&id("3")).unwrap();

    assert_eq!(written, vec![UserField::Role]);
    let after = state.row(&id("3")).unwrap();
    assert!(!after.is_editing());
    assert_eq!(after.record().role, "member");
    assert_eq!(after.record().name, before.name);
    assert_eq!(after.record().email, before.email);
}

#[test]
fn edits_need_edit_mode_and_editable_fields() {
    let mut state = list(15);
    assert_eq!(
        state.edit_field(&id("1"), UserField::Name, "x"),
        Err(ListError::NotEditing(id("1")))
    );
    state.begin_edit(&id("1")).unwrap();
    assert_eq!(
        state.edit_field(&id("1"), UserField::Id, "100"),
        Err(ListError::FieldNotEditable(UserField::Id))
    );
    assert_eq!(state.save(&id("2")), Err(ListError::NotEditing(id("2"))));
}

#[test]
fn delete_removes_row_and_selection_entry() {
    let mut state = list(15);
    state.toggle_selected(&id("4")).unwrap();
    state.toggle_selected(&id("5")).unwrap();

    let removed = state.delete(&id("4")).unwrap();
    assert_eq!(removed.name, "Caterina Binotto");
    assert!(state.row(&id("4")).is_none());
    assert!(!state.is_selected(&id("4")));
    assert!(state.is_selected(&id("5")));

    state.select_all();
    assert!(!state.is_selected(&id("4")));
    assert_eq!(state.selection().len(), 6);
}

#[test]
fn delete_applies_to_row_in_edit_mode() {
    let mut state = list(15);
    state.begin_edit(&id("2")).unwrap();
    state.delete(&id("2")).unwrap();
    assert!(state.editing_row().is_none());
}

#[test]
fn bulk_delete_scenario() {
    let config = ListConfig::default();
    let mut state = UserListState::with_records(
        config,
        [
            UserRecord::new("1", "A", "", ""),
            UserRecord::new("2", "B", "", ""),
            UserRecord::new("3", "C", "", ""),
        ],
    );
    state.toggle_selected(&id("1")).unwrap();
    state.toggle_selected(&id("3")).unwrap();

    assert_eq!(state.delete_selected(), Ok(2));
    let remaining: Vec<&str> =
        state.rows().iter().map(|row| row.id().as_str()).collect();
    assert_eq!(remaining, vec!["2"]);
    assert!(state.selection().is_empty());
}

#[test]
fn empty_bulk_delete_follows_policy() {
    let mut notify = list(15);
    assert_eq!(notify.delete_selected(), Err(ListError::EmptySelection));
    assert_eq!(notify.len(), 7);

    let config = ListConfig::default().with_empty_selection(EmptySelectionPolicy::Ignore);
    let mut ignore = UserListState::with_records(config, feed());
    assert_eq!(ignore.delete_selected(), Ok(0));
    assert_eq!(ignore.len(), 7);
}

#[test]
fn select_all_scopes() {
    let base = ListConfig::default().with_page_size(2).unwrap();

    let mut filtered = UserListState::with_records(base, feed());
    filtered.set_search_input("kumar");
    filtered.select_all();
    assert_eq!(filtered.selection().len(), 2);

    let mut everything = UserListState::with_records(
        base.with_select_all_scope(SelectAllScope::Everything),
        feed(),
    );
    everything.set_search_input("kumar");
    everything.select_all();
    assert_eq!(everything.selection().len(), 7);
    assert!(everything.all_selected());

    let mut page = UserListState::with_records(
        base.with_select_all_scope(SelectAllScope::Page),
        feed(),
    );
    page.go_to(PageRequest::Number(2)).unwrap();
    page.select_all();
    let selected: Vec<&str> = page.selection().iter().map(UserId::as_str).collect();
    assert_eq!(selected, vec!["3", "4"]);
}

#[test]
fn reload_resets_selection_and_page() {
    let mut state = list(2);
    state.toggle_selected(&id("1")).unwrap();
    state.go_to(PageRequest::Last).unwrap();
    state.load(feed());
    assert!(state.selection().is_empty());
    assert_eq!(state.current_page(), 1);
}
