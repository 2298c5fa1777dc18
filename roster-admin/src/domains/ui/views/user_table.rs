use iced::widget::{
    Column, button, checkbox, column, container, row, scrollable, text,
    text_input,
};
use iced::{Alignment, Element, Length};
use roster_core::{SearchTrigger, UiRow, UserField, UserListState};

use crate::domains::ui::theme::{self, RosterTheme};
use crate::domains::ui::views::pagination::view_pagination;
use crate::domains::user_list::messages::Message;
use crate::domains::user_list::{LoadStatus, UserListDomain};

const CHECK_WIDTH: f32 = 32.0;
const ACTIONS_WIDTH: f32 = 170.0;

/// Width share of each data column.
fn portion(field: UserField) -> u16 {
    match field {
        UserField::Id => 1,
        UserField::Name => 3,
        UserField::Email => 4,
        UserField::Role => 2,
    }
}

pub fn view_user_table(domain: &UserListDomain) -> Element<'_, Message> {
    let list = domain.list();

    let body: Element<'_, Message> = match domain.load_status() {
        LoadStatus::Pending => placeholder("Loading users…"),
        _ if list.filtered_len() == 0 && list.is_empty() => placeholder("No users"),
        _ if list.filtered_len() == 0 => placeholder("No users match the search"),
        _ => {
            let rows = Column::with_children(
                list.visible_rows()
                    .into_iter()
                    .map(|row| user_row(list, row)),
            )
            .spacing(6);
            scrollable(rows).height(Length::Fill).into()
        }
    };

    let footer = row![
        button(text("Delete Selected"))
            .style(theme::Button::Destructive.style())
            .padding([8, 14])
            .on_press(Message::DeleteSelectedRequested),
        container(view_pagination(list.pager()))
            .align_x(Alignment::End)
            .width(Length::Fill),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    container(
        column![search_bar(list), table_header(list), body, footer]
            .spacing(12)
            .padding(20),
    )
    .style(theme::Container::Card.style())
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn search_bar(list: &UserListState) -> Element<'_, Message> {
    let placeholder = match list.config().search_trigger {
        SearchTrigger::Live => "Search by id, name, email or role",
        SearchTrigger::Submit => "Search by id, name, email or role, then press Search",
    };

    row![
        text_input(placeholder, &list.view().search_input)
            .on_input(Message::SearchInputChanged)
            .on_submit(Message::SearchSubmitted)
            .padding(8)
            .width(Length::Fill),
        button(text("Search"))
            .style(theme::Button::Primary.style())
            .padding([8, 14])
            .on_press(Message::SearchSubmitted),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

fn table_header(list: &UserListState) -> Element<'_, Message> {
    let label = |content: &'static str| {
        text(content).size(14).color(RosterTheme::TEXT_SECONDARY)
    };

    let mut header = row![
        container(checkbox(list.all_selected()).on_toggle(Message::SelectAllToggled))
            .width(CHECK_WIDTH),
        container(label(UserField::Id.label()))
            .width(Length::FillPortion(portion(UserField::Id))),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    for field in UserField::EDITABLE {
        header = header.push(
            container(label(field.label()))
                .width(Length::FillPortion(portion(field))),
        );
    }

    container(header.push(container(label("Actions")).width(ACTIONS_WIDTH)))
        .style(theme::Container::Header.style())
        .padding([8, 12])
        .width(Length::Fill)
        .into()
}

fn user_row<'a>(list: &'a UserListState, ui_row: &'a UiRow) -> Element<'a, Message> {
    let id = ui_row.id();
    let selected = list.is_selected(id);

    let toggle_id = id.clone();
    let mut cells = row![
        container(
            checkbox(selected)
                .on_toggle(move |_| Message::SelectionToggled(toggle_id.clone()))
        )
        .width(CHECK_WIDTH),
        container(text(id.as_str()).size(14))
            .width(Length::FillPortion(portion(UserField::Id))),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    for field in UserField::EDITABLE {
        cells = cells.push(
            container(cell(ui_row, field)).width(Length::FillPortion(portion(field))),
        );
    }

    let actions = if ui_row.is_editing() {
        row![
            button(text("Save"))
                .style(theme::Button::Primary.style())
                .padding([6, 10])
                .on_press(Message::SaveRequested(id.clone())),
        ]
    } else {
        row![
            button(text("Edit"))
                .style(theme::Button::Secondary.style())
                .padding([6, 10])
                .on_press(Message::EditRequested(id.clone())),
            button(text("Delete"))
                .style(theme::Button::Destructive.style())
                .padding([6, 10])
                .on_press(Message::DeleteRequested(id.clone())),
        ]
        .spacing(8)
    };

    let style = if selected {
        theme::Container::RowSelected
    } else {
        theme::Container::Row
    };

    container(cells.push(container(actions).width(ACTIONS_WIDTH)))
        .style(style.style())
        .padding([8, 12])
        .width(Length::Fill)
        .into()
}

/// Plain text while viewing, an input bound to the edit buffer while
/// editing.
fn cell(ui_row: &UiRow, field: UserField) -> Element<'_, Message> {
    let value = ui_row.display_value(field);
    if !ui_row.is_editing() {
        return text(value).size(14).into();
    }

    let id = ui_row.id().clone();
    text_input(field.label(), value)
        .on_input(move |input| Message::FieldEdited(id.clone(), field, input))
        .padding(4)
        .size(14)
        .into()
}

fn placeholder(message: &str) -> Element<'_, Message> {
    container(text(message).size(16).color(RosterTheme::TEXT_DIMMED))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
