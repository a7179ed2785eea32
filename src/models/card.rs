//! Card models

use crate::utils::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardCategory {
    Virtual,
    Physical,
}

impl CardCategory {
    pub fn label(&self) -> &'static str {
        match self {
            CardCategory::Virtual => "Virtual",
            CardCategory::Physical => "Physical",
        }
    }
}

/// Display colour tag of a card. Only used for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardColor {
    Orchid,
    Ocean,
    Sunset,
    Emerald,
    Indigo,
    Amber,
}

impl CardColor {
    /// Colours a freshly issued card is drawn from.
    pub const ISSUE_PALETTE: [CardColor; 4] = [
        CardColor::Sunset,
        CardColor::Emerald,
        CardColor::Indigo,
        CardColor::Amber,
    ];

    /// Embed colour for this tag
    pub fn hex(&self) -> u32 {
        match self {
            CardColor::Orchid => 0xa855f7,
            CardColor::Ocean => 0x06b6d4,
            CardColor::Sunset => 0xf97316,
            CardColor::Emerald => 0x10b981,
            CardColor::Indigo => 0x6366f1,
            CardColor::Amber => 0xeab308,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CardColor::Orchid => "Orchid",
            CardColor::Ocean => "Ocean",
            CardColor::Sunset => "Sunset",
            CardColor::Emerald => "Emerald",
            CardColor::Indigo => "Indigo",
            CardColor::Amber => "Amber",
        }
    }
}

/// A payment card owned by the signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: String,
    /// Masked number, e.g. `4532 •••• •••• 8901`
    pub number: String,
    pub balance: Money,
    pub category: CardCategory,
    pub color: CardColor,
    pub owner: String,
}

/// Mask a pair of visible four-digit groups the way every card number is shown.
pub fn mask_number(first: u16, last: u16) -> String {
    format!("{:04} •••• •••• {:04}", first, last)
}
