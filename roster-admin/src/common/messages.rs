use iced::Task;

use crate::domains::feedback::{self, Notice};
use crate::domains::user_list;

/// Result of a domain update that includes both a task and events to emit
pub struct DomainUpdateResult {
    /// The task to execute (may produce more messages)
    pub task: Task<DomainMessage>,
    /// Events to broadcast to other domains immediately
    pub events: Vec<CrossDomainEvent>,
}

impl DomainUpdateResult {
    pub fn none() -> Self {
        Self::task(Task::none())
    }

    pub fn task(task: Task<DomainMessage>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    pub fn with_events(
        task: Task<DomainMessage>,
        events: Vec<CrossDomainEvent>,
    ) -> Self {
        Self { task, events }
    }

    pub fn event(event: CrossDomainEvent) -> Self {
        Self::with_events(Task::none(), vec![event])
    }
}

impl std::fmt::Debug for DomainUpdateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainUpdateResult")
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

/// The main domain message router
#[derive(Clone, Debug)]
pub enum DomainMessage {
    /// User table: loading, search, paging, editing and deletion
    UserList(user_list::messages::Message),

    /// Transient notices shown over the table
    Feedback(feedback::Message),
}

/// Events one domain raises for another to react to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrossDomainEvent {
    NoticeRaised(Notice),
}

impl From<user_list::messages::Message> for DomainMessage {
    fn from(msg: user_list::messages::Message) -> Self {
        DomainMessage::UserList(msg)
    }
}

impl From<feedback::Message> for DomainMessage {
    fn from(msg: feedback::Message) -> Self {
        DomainMessage::Feedback(msg)
    }
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UserList(msg) => msg.name(),
            Self::Feedback(msg) => msg.name(),
        }
    }
}
