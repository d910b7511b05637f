//! # Boss Bar Display Enums
//!
//! Colors, divisions and flags a boss bar can display, each mapping
//! one-to-one onto a protocol byte value. The mappings are fixed by the
//! wire protocol, so they are written as explicit matches rather than
//! derived from declaration order.

use serde::{Deserialize, Serialize};

/// Color of the rendered bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarColor {
    #[default]
    Pink,
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    White,
}

impl BarColor {
    /// Returns the protocol byte for this color.
    pub fn protocol_id(self) -> u8 {
        match self {
            BarColor::Pink => 0,
            BarColor::Blue => 1,
            BarColor::Red => 2,
            BarColor::Green => 3,
            BarColor::Yellow => 4,
            BarColor::Purple => 5,
            BarColor::White => 6,
        }
    }
}

/// Overlay of the rendered bar: solid, or divided into notches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarDivision {
    #[default]
    Solid,
    Segments6,
    Segments10,
    Segments12,
    Segments20,
}

impl BarDivision {
    /// Returns the protocol byte for this division.
    pub fn protocol_id(self) -> u8 {
        match self {
            BarDivision::Solid => 0,
            BarDivision::Segments6 => 1,
            BarDivision::Segments10 => 2,
            BarDivision::Segments12 => 3,
            BarDivision::Segments20 => 4,
        }
    }
}

/// Screen-effect flags a bar can enable on its viewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarFlag {
    /// Darken the sky while the bar is shown.
    DarkenScreen,
    /// Play end-boss music while the bar is shown.
    PlayBossMusic,
    /// Draw world fog while the bar is shown.
    CreateWorldFog,
}

impl BarFlag {
    /// Returns this flag's bit in the wire mask.
    pub fn bit(self) -> u8 {
        match self {
            BarFlag::DarkenScreen => 0x1,
            BarFlag::PlayBossMusic => 0x2,
            BarFlag::CreateWorldFog => 0x4,
        }
    }
}

/// Combines a set of flags into the wire bitmask.
pub fn flag_mask(flags: impl IntoIterator<Item = BarFlag>) -> u8 {
    flags.into_iter().fold(0, |mask, flag| mask | flag.bit())
}
