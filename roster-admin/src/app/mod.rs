use std::sync::Arc;

use iced::{Application, Font, Program as IcedProgram, Settings, Theme};

use crate::common::messages::DomainMessage;
use crate::state::State;
use crate::{update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build the Roster application using the provided configuration.
pub fn application(
    config: AppConfig,
) -> Application<
    impl IcedProgram<State = State, Message = DomainMessage, Theme = Theme>,
> {
    let config = Arc::new(config);

    iced::application(
        move || bootstrap::runtime_boot(&config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("Roster Admin")
    .theme(app_theme)
    .window_size(iced::Size::new(1280.0, 720.0))
}

fn default_settings() -> Settings {
    Settings {
        id: Some("roster-admin".to_string()),
        antialiasing: true,
        default_font: Font::default(),
        ..Settings::default()
    }
}

fn app_theme(_: &State) -> Theme {
    crate::domains::ui::theme::RosterTheme::theme()
}
