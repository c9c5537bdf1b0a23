//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Game mode - who plays O?
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameMode {
    /// Human (X) against the minimax engine (O).
    #[default]
    Computer,
    /// Two humans sharing the console.
    Human,
}

impl GameMode {
    /// Returns the menu label.
    pub fn name(&self) -> &str {
        match self {
            GameMode::Computer => "Play with Computer",
            GameMode::Human => "Play with Human",
        }
    }

    /// Maps the menu choice (`1` or `2`) to a mode.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(GameMode::Computer),
            "2" => Some(GameMode::Human),
            _ => None,
        }
    }
}
