//! Feedback domain
//!
//! Holds at most one blocking notice. While it is shown the table is
//! covered and only the Dismiss button responds.

use iced::Task;

use crate::common::messages::{CrossDomainEvent, DomainMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Dismissed,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dismissed => "Feedback::Dismissed",
        }
    }
}

#[derive(Debug, Default)]
pub struct FeedbackDomain {
    notice: Option<Notice>,
}

impl FeedbackDomain {
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Replaces whatever notice is showing.
    pub fn show(&mut self, notice: Notice) {
        log::debug!("Showing notice: {}", notice.text);
        self.notice = Some(notice);
    }

    pub fn dismiss(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn update(&mut self, message: Message) -> Task<DomainMessage> {
        match message {
            Message::Dismissed => {
                self.dismiss();
            }
        }
        Task::none()
    }

    pub fn handle_event(&mut self, event: &CrossDomainEvent) -> Task<DomainMessage> {
        match event {
            CrossDomainEvent::NoticeRaised(notice) => self.show(notice.clone()),
        }
        Task::none()
    }
}
