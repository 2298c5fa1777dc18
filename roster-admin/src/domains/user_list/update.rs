use std::sync::Arc;

use iced::Task;
use log::{debug, error, info, warn};
use roster_core::{ListError, UserRecord};

use crate::common::messages::{CrossDomainEvent, DomainMessage, DomainUpdateResult};
use crate::domains::feedback::Notice;
use crate::domains::user_list::LoadStatus;
use crate::domains::user_list::messages::Message;
use crate::infra::services::user_directory::UserDirectory;
use crate::state::State;

/// Handle user list domain messages
pub fn update_user_list(state: &mut State, message: Message) -> DomainUpdateResult {
    debug!("User list update: {}", message.name());

    let domain = &mut state.domains.user_list.state;

    match message {
        Message::LoadUsers => {
            let Some(directory) = domain.directory.clone() else {
                error!("No UserDirectory available, nothing to load");
                domain.load_status = LoadStatus::Failed;
                return DomainUpdateResult::none();
            };
            info!("Loading users");
            domain.load_status = LoadStatus::Pending;
            DomainUpdateResult::task(Task::perform(fetch_users(directory), |result| {
                DomainMessage::from(Message::UsersLoaded(result))
            }))
        }

        Message::UsersLoaded(Ok(users)) => {
            info!("Successfully loaded {} users", users.len());
            domain.list.load(users);
            domain.load_status = LoadStatus::Loaded;
            DomainUpdateResult::none()
        }

        Message::UsersLoaded(Err(err)) => {
            error!("Failed to load users: {}", err);
            domain.load_status = LoadStatus::Failed;
            DomainUpdateResult::none()
        }

        Message::SearchInputChanged(input) => {
            domain.list.set_search_input(input);
            DomainUpdateResult::none()
        }

        Message::SearchSubmitted => {
            domain.list.submit_search();
            DomainUpdateResult::none()
        }

        Message::PageRequested(request) => {
            match domain.list.go_to(request) {
                Ok(page) => debug!("Showing page {}", page),
                Err(err) => return rejected(err),
            }
            DomainUpdateResult::none()
        }

        Message::SelectionToggled(id) => {
            if let Err(err) = domain.list.toggle_selected(&id) {
                return rejected(err);
            }
            DomainUpdateResult::none()
        }

        Message::SelectAllToggled(checked) => {
            if checked {
                domain.list.select_all();
            } else {
                domain.list.clear_selection();
            }
            debug!("{} rows selected", domain.list.selection().len());
            DomainUpdateResult::none()
        }

        Message::EditRequested(id) => {
            if let Err(err) = domain.list.begin_edit(&id) {
                return rejected(err);
            }
            DomainUpdateResult::none()
        }

        Message::FieldEdited(id, field, value) => {
            if let Err(err) = domain.list.edit_field(&id, field, value) {
                return rejected(err);
            }
            DomainUpdateResult::none()
        }

        Message::SaveRequested(id) => {
            match domain.list.save(&id) {
                Ok(fields) => info!("Saved user {} ({} fields changed)", id, fields.len()),
                Err(err) => return rejected(err),
            }
            DomainUpdateResult::none()
        }

        Message::DeleteRequested(id) => match domain.list.delete(&id) {
            Ok(record) => {
                info!("Deleted user {}", record.id);
                DomainUpdateResult::event(CrossDomainEvent::NoticeRaised(
                    Notice::info(format!("Deleted user {}.", record.id)),
                ))
            }
            Err(err) => rejected(err),
        },

        Message::DeleteSelectedRequested => match domain.list.delete_selected() {
            Ok(0) => {
                debug!("Bulk delete with nothing selected ignored");
                DomainUpdateResult::none()
            }
            Ok(count) => {
                info!("Deleted {} selected users", count);
                DomainUpdateResult::event(CrossDomainEvent::NoticeRaised(
                    Notice::info(format!("Deleted {} selected users.", count)),
                ))
            }
            Err(err) => rejected(err),
        },
    }
}

/// The fetch behind `LoadUsers`. Errors are flattened to their full
/// context chain so they can travel inside a message.
pub async fn fetch_users(
    directory: Arc<dyn UserDirectory>,
) -> Result<Vec<UserRecord>, String> {
    directory.list_users().await.map_err(|e| format!("{:#}", e))
}

/// An empty bulk delete is surfaced to the user; anything else is a stale
/// or out-of-range request and only logged.
fn rejected(err: ListError) -> DomainUpdateResult {
    match err {
        ListError::EmptySelection => DomainUpdateResult::event(
            CrossDomainEvent::NoticeRaised(Notice::warning(err.to_string())),
        ),
        other => {
            warn!("Ignoring user list request: {}", other);
            DomainUpdateResult::none()
        }
    }
}
