use iced::{
    Background, Border, Color, Shadow, Theme, theme,
    widget::{button, container},
};

/// Dark theme with a teal accent
#[derive(Debug, Clone, Copy)]
pub struct RosterTheme;

impl RosterTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.05, 0.05, 0.06);
    pub const ACCENT: Color = Color::from_rgb(0.0, 0.62, 0.6);
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.0, 0.7, 0.68);
    pub const ACCENT_PRESSED: Color = Color::from_rgb(0.0, 0.5, 0.48);

    pub const CARD_BG: Color = Color::from_rgb(0.1, 0.1, 0.11);
    pub const ROW_SELECTED: Color = Color::from_rgb(0.08, 0.16, 0.16);
    pub const BORDER_COLOR: Color = Color::from_rgb(0.2, 0.2, 0.22);
    pub const SECONDARY_BG: Color = Color::from_rgb(0.16, 0.16, 0.18);
    pub const SECONDARY_HOVER: Color = Color::from_rgb(0.22, 0.22, 0.24);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.5, 0.5, 0.5);

    pub const SUCCESS: Color = Color::from_rgb(0.0, 0.8, 0.4);
    pub const WARNING: Color = Color::from_rgb(1.0, 0.6, 0.0);
    pub const ERROR: Color = Color::from_rgb(1.0, 0.2, 0.2);
    pub const ERROR_HOVER: Color = Color::from_rgb(1.0, 0.3, 0.3);
    pub const ERROR_PRESSED: Color = Color::from_rgb(0.9, 0.1, 0.1);

    pub const OVERLAY: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.7);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("Roster Dark".to_string(), palette)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Container {
    Card,
    Header,
    Row,
    RowSelected,
    Modal,
    ModalOverlay,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Card => |_| container::Style {
                text_color: Some(RosterTheme::TEXT_PRIMARY),
                background: Some(Background::Color(RosterTheme::CARD_BG)),
                border: Border {
                    color: RosterTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..Default::default()
            },
            Container::Header => |_| container::Style {
                text_color: Some(RosterTheme::TEXT_SECONDARY),
                background: Some(Background::Color(RosterTheme::SECONDARY_BG)),
                border: Border {
                    color: RosterTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            },
            Container::Row => |_| container::Style {
                text_color: Some(RosterTheme::TEXT_PRIMARY),
                border: Border {
                    color: RosterTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            },
            Container::RowSelected => |_| container::Style {
                text_color: Some(RosterTheme::TEXT_PRIMARY),
                background: Some(Background::Color(RosterTheme::ROW_SELECTED)),
                border: Border {
                    color: RosterTheme::ACCENT,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            },
            Container::Modal => |_| container::Style {
                text_color: Some(RosterTheme::TEXT_PRIMARY),
                background: Some(Background::Color(RosterTheme::CARD_BG)),
                border: Border {
                    color: RosterTheme::ACCENT,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 16.0,
                },
                ..Default::default()
            },
            Container::ModalOverlay => |_| container::Style {
                background: Some(Background::Color(RosterTheme::OVERLAY)),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Button {
    Primary,
    Secondary,
    Destructive,
    /// The numbered button of the page being shown
    PageCurrent,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_, status| {
                filled(
                    status,
                    RosterTheme::ACCENT,
                    RosterTheme::ACCENT_HOVER,
                    RosterTheme::ACCENT_PRESSED,
                    8.0,
                )
            },
            Button::Secondary => |_, status| {
                filled(
                    status,
                    RosterTheme::SECONDARY_BG,
                    RosterTheme::SECONDARY_HOVER,
                    RosterTheme::BORDER_COLOR,
                    6.0,
                )
            },
            Button::Destructive => |_, status| {
                filled(
                    status,
                    RosterTheme::ERROR,
                    RosterTheme::ERROR_HOVER,
                    RosterTheme::ERROR_PRESSED,
                    6.0,
                )
            },
            Button::PageCurrent => |_, _| button::Style {
                text_color: RosterTheme::TEXT_PRIMARY,
                background: Some(Background::Color(RosterTheme::ACCENT)),
                border: Border {
                    color: RosterTheme::ACCENT,
                    width: 1.0,
                    radius: 6.0.into(),
                },
                ..Default::default()
            },
        }
    }
}

fn filled(
    status: button::Status,
    base: Color,
    hovered: Color,
    pressed: Color,
    radius: f32,
) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Active => (base, RosterTheme::TEXT_PRIMARY),
        button::Status::Hovered => (hovered, RosterTheme::TEXT_PRIMARY),
        button::Status::Pressed => (pressed, RosterTheme::TEXT_PRIMARY),
        button::Status::Disabled => (RosterTheme::SECONDARY_BG, RosterTheme::TEXT_DIMMED),
    };

    button::Style {
        text_color,
        background: Some(Background::Color(background)),
        border: Border {
            color: background,
            width: 1.0,
            radius: radius.into(),
        },
        ..Default::default()
    }
}
