#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, SearchParams};

/// Session settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// Color played by the human; the engine plays the other one.
    pub human: Color,
    pub search: SearchParams,
    /// Accept human moves the piece cannot make. Moves that leave the
    /// human's king attacked are still refused.
    pub cheat: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            human: Color::White,
            search: SearchParams::default(),
            cheat: false,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_human(mut self, color: Color) -> Self {
        self.human = color;
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: SearchParams) -> Self {
        self.search = search;
        self
    }

    #[must_use]
    pub fn with_cheat(mut self, cheat: bool) -> Self {
        self.cheat = cheat;
        self
    }

    #[must_use]
    pub const fn engine(&self) -> Color {
        self.human.opponent()
    }
}
