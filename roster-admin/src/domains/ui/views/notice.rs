use iced::widget::{button, center, column, container, opaque, text};
use iced::{Alignment, Element};

use crate::domains::feedback::{Message, Notice, NoticeKind};
use crate::domains::ui::theme::{self, RosterTheme};

/// Full-window overlay that swallows input until dismissed.
pub fn view_notice(notice: &Notice) -> Element<'_, Message> {
    let color = match notice.kind {
        NoticeKind::Info => RosterTheme::TEXT_PRIMARY,
        NoticeKind::Warning => RosterTheme::WARNING,
    };

    let card = container(
        column![
            text(&notice.text).size(16).color(color),
            button(text("Dismiss"))
                .style(theme::Button::Primary.style())
                .padding([8, 14])
                .on_press(Message::Dismissed),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .style(theme::Container::Modal.style())
    .padding(24)
    .max_width(420.0);

    opaque(center(card).style(theme::Container::ModalOverlay.style()))
}
