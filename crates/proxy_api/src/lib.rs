//! # Proxy API
//!
//! The host-supplied capability surface consumed by display-layer crates.
//! The proxy owns connections, packet delivery and task scheduling; this
//! crate pins down the boundary as plain data types plus one context trait,
//! so display features can be written and tested without the proxy itself.
//!
//! ## Module Organization
//!
//! - [`types`] - Player identifiers and protocol versions
//! - [`text`] - The chat component type used for formatted text
//! - [`packet`] - The structured boss bar packet handed to the protocol layer
//! - [`context`] - The [`ProxyContext`] capability trait

pub mod context;
pub mod packet;
pub mod text;
pub mod types;

pub use context::{ProxyContext, ProxyError, ScheduledTask};
pub use packet::{BossBarAction, BossBarPacket};
pub use text::{ChatColor, TextComponent};
pub use types::{PlayerId, ProtocolVersion};

// Re-exported so downstream crates use the same UUID version the packet
// layer was built against.
pub use uuid::Uuid;
