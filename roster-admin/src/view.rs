use iced::widget::{container, stack};
use iced::{Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::ui::views::{view_notice, view_user_table};
use crate::state::State;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    let table = container(
        view_user_table(&state.domains.user_list).map(DomainMessage::UserList),
    )
    .padding(16)
    .width(Length::Fill)
    .height(Length::Fill);

    match state.domains.feedback.notice() {
        Some(notice) => stack![table, view_notice(notice).map(DomainMessage::Feedback)]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => table.into(),
    }
}
