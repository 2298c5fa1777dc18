use iced::widget::{Row, button, row, text};
use iced::{Alignment, Element};
use roster_core::{PageRequest, Pager};

use crate::domains::ui::theme;
use crate::domains::user_list::messages::Message;

/// First, Previous, one button per page, Next, Last. Edge buttons are
/// disabled when they would not move.
pub fn view_pagination<'a>(pager: Pager) -> Element<'a, Message> {
    let nav = |label: &'static str, request: PageRequest, enabled: bool| {
        button(text(label).size(14))
            .style(theme::Button::Secondary.style())
            .padding([6, 10])
            .on_press_maybe(enabled.then_some(Message::PageRequested(request)))
    };

    let numbers = Row::with_children(pager.numbers().map(|page| {
        let style = if pager.is_current(page) {
            theme::Button::PageCurrent
        } else {
            theme::Button::Secondary
        };
        button(text(page.to_string()).size(14))
            .style(style.style())
            .padding([6, 10])
            .on_press(Message::PageRequested(PageRequest::Number(page)))
            .into()
    }))
    .spacing(4);

    row![
        nav("First", PageRequest::First, pager.has_previous()),
        nav("Previous", PageRequest::Previous, pager.has_previous()),
        numbers,
        nav("Next", PageRequest::Next, pager.has_next()),
        nav("Last", PageRequest::Last, pager.has_next()),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}
