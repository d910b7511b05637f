//! # Boss Bar Packet Shape
//!
//! The fixed-layout boss bar packet handed to the host protocol layer for
//! delivery. This crate never encodes the packet itself - the wire format
//! (and any per-version remapping) is owned by the proxy. What lives here is
//! the one structured description both sides agree on.
//!
//! The packet mirrors the vanilla protocol: a bar UUID plus one of six
//! actions. Color, division and flag values arrive as raw protocol bytes
//! produced by the display layer; the packet carries them opaquely.

use crate::text::TextComponent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One boss bar update addressed to a single client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossBarPacket {
    /// Identity of the bar on the client. All actions for the same bar
    /// must carry the same UUID.
    pub bar_id: Uuid,
    /// What the client should do with the bar.
    pub action: BossBarAction,
}

impl BossBarPacket {
    pub fn new(bar_id: Uuid, action: BossBarAction) -> Self {
        Self { bar_id, action }
    }
}

/// The six boss bar actions defined by the protocol.
///
/// `health` is the client-side name for the fill fraction of the bar; the
/// display layer calls the same quantity "progress".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BossBarAction {
    /// Show the bar with its complete initial state.
    Add {
        title: TextComponent,
        health: f32,
        color: u8,
        division: u8,
        flags: u8,
    },
    /// Hide and forget the bar.
    Remove,
    /// Change only the fill fraction.
    UpdateHealth { health: f32 },
    /// Change only the title.
    UpdateTitle { title: TextComponent },
    /// Change color and division together (the wire carries both in one
    /// action, so a color-only change still resends the division).
    UpdateStyle { color: u8, division: u8 },
    /// Change the flag bitmask.
    UpdateFlags { flags: u8 },
}

impl BossBarAction {
    /// Returns the wire discriminant for this action.
    pub fn action_id(&self) -> u8 {
        match self {
            BossBarAction::Add { .. } => 0,
            BossBarAction::Remove => 1,
            BossBarAction::UpdateHealth { .. } => 2,
            BossBarAction::UpdateTitle { .. } => 3,
            BossBarAction::UpdateStyle { .. } => 4,
            BossBarAction::UpdateFlags { .. } => 5,
        }
    }
}
