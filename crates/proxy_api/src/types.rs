//! # Core Type Definitions
//!
//! Fundamental identifier types shared between the host proxy and the
//! display-layer crates built on top of it.
//!
//! ## Key Types
//!
//! - [`PlayerId`] - Unique identifier for a client connection on the proxy
//! - [`ProtocolVersion`] - Game protocol version negotiated by a client
//!
//! ## Design Principles
//!
//! - **Type Safety**: Wrapper types prevent ID confusion across subsystems
//! - **Serialization**: All types support serde for transports that re-encode
//!   internal messages as JSON
//! - **Performance**: Plain `Copy` types with cheap comparison

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player connected to the proxy.
///
/// This is a wrapper around UUID that provides type safety and ensures
/// player IDs cannot be confused with other identifiers in the system
/// (such as boss bar IDs, which are also UUIDs on the wire).
///
/// # Examples
///
/// ```rust
/// use proxy_api::PlayerId;
///
/// // Create a new random player ID
/// let player_id = PlayerId::new();
///
/// // Parse from string
/// let player_id = PlayerId::from_str("550e8400-e29b-41d4-a716-446655440000")?;
///
/// // Convert to string for logging/display
/// println!("Player ID: {}", player_id);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Creates a new random player ID using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a player ID from a string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - A string slice containing a valid UUID
    ///
    /// # Returns
    ///
    /// Returns `Ok(PlayerId)` if the string is a valid UUID, otherwise
    /// `Err(uuid::Error)` with details about the parsing failure.
    pub fn from_str(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl std::str::FromStr for PlayerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s)
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Game protocol version negotiated during a client's handshake.
///
/// The proxy records the raw protocol number for every connection; display
/// features that only exist from a certain client version onward use this
/// to decide whether a packet may be sent at all.
///
/// Versions are ordered, so range checks read naturally:
///
/// ```rust
/// use proxy_api::ProtocolVersion;
///
/// let version = ProtocolVersion::MINECRAFT_1_12_2;
/// assert!(version >= ProtocolVersion::MINECRAFT_1_9);
/// assert!(version.supports_boss_bars());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProtocolVersion(pub u32);

impl ProtocolVersion {
    /// Minecraft 1.8.x.
    pub const MINECRAFT_1_8: ProtocolVersion = ProtocolVersion(47);
    /// Minecraft 1.9, the release that introduced the boss bar packet.
    pub const MINECRAFT_1_9: ProtocolVersion = ProtocolVersion(107);
    /// Minecraft 1.12.2.
    pub const MINECRAFT_1_12_2: ProtocolVersion = ProtocolVersion(340);
    /// Minecraft 1.16.5.
    pub const MINECRAFT_1_16_5: ProtocolVersion = ProtocolVersion(754);
    /// Minecraft 1.21.
    pub const MINECRAFT_1_21: ProtocolVersion = ProtocolVersion(767);

    /// Returns whether a client on this version understands the boss bar
    /// packet. Older clients would disconnect on an unknown packet ID, so
    /// dispatch must skip them entirely.
    pub fn supports_boss_bars(self) -> bool {
        self >= Self::MINECRAFT_1_9
    }
}

impl std::fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
