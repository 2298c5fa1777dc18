use iced::Task;

use crate::common::messages::{CrossDomainEvent, DomainMessage, DomainUpdateResult};
use crate::domains::user_list::update::update_user_list;
use crate::state::State;

/// Route a message to its domain, then deliver any events it raised.
pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    log::trace!("update: {}", message.name());

    let result = match message {
        DomainMessage::UserList(msg) => update_user_list(state, msg),
        DomainMessage::Feedback(msg) => {
            DomainUpdateResult::task(state.domains.feedback.update(msg))
        }
    };

    let DomainUpdateResult { task, events } = result;
    if events.is_empty() {
        return task;
    }

    let mut tasks = Vec::with_capacity(events.len() + 1);
    tasks.push(task);
    tasks.extend(events.iter().map(|event| handle_event(state, event)));
    Task::batch(tasks)
}

fn handle_event(state: &mut State, event: &CrossDomainEvent) -> Task<DomainMessage> {
    log::debug!("Cross-domain event: {:?}", event);
    state.domains.feedback.handle_event(event)
}
