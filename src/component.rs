use std::str::FromStr;

use serde::Serialize;

/// One renderable span of chat text
///
/// Optional fields are omitted from the serialized form when unset, never
/// emitted as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Component {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlined: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obfuscated: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<Component>,
    #[serde(rename = "hoverEvent", skip_serializing_if = "Option::is_none")]
    pub hover_event: Option<HoverEvent>,
    #[serde(rename = "clickEvent", skip_serializing_if = "Option::is_none")]
    pub click_event: Option<ClickEvent>,
}

impl Component {
    /// A bare `{"text": …}` leaf carrying no styling of its own.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// The blank white container that aggregated siblings hang off of.
    pub fn group() -> Self {
        Self {
            color: Some(Color::White),
            ..Self::default()
        }
    }
}

/// The sixteen chat colors a component may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl FromStr for Color {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "black" => Color::Black,
            "dark_blue" => Color::DarkBlue,
            "dark_green" => Color::DarkGreen,
            "dark_aqua" => Color::DarkAqua,
            "dark_red" => Color::DarkRed,
            "dark_purple" => Color::DarkPurple,
            "gold" => Color::Gold,
            "gray" => Color::Gray,
            "dark_gray" => Color::DarkGray,
            "blue" => Color::Blue,
            "green" => Color::Green,
            "aqua" => Color::Aqua,
            "red" => Color::Red,
            "light_purple" => Color::LightPurple,
            "yellow" => Color::Yellow,
            "white" => Color::White,
            _ => return Err(()),
        })
    }
}

/// Interactive behavior triggered by hovering a component
///
/// Serializes as `{"action": "show_text"|"show_achievement", "value": …}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum HoverEvent {
    ShowText(Box<Component>),
    ShowAchievement(String),
}

/// Interactive behavior triggered by activating a component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClickEvent {
    pub action: ClickAction,
    pub value: String,
}

/// The four actions a click event may perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickAction {
    OpenUrl,
    OpenFile,
    RunCommand,
    SuggestCommand,
}

impl FromStr for ClickAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "open_url" => ClickAction::OpenUrl,
            "open_file" => ClickAction::OpenFile,
            "run_command" => ClickAction::RunCommand,
            "suggest_command" => ClickAction::SuggestCommand,
            _ => return Err(()),
        })
    }
}
