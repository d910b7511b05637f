//! # Proxy Context Interface
//!
//! This module defines the capability surface the host proxy hands to
//! display-layer code. The context is the only bridge to the host: it owns
//! the network thread, the connection table and the task scheduler, and
//! exposes exactly the queries and primitives the display layer needs.
//!
//! ## Core Services
//!
//! The [`ProxyContext`] provides access to:
//! - **Connection Queries** - connectivity and protocol version per player
//! - **Packet Delivery** - handing a constructed boss bar packet to the
//!   protocol layer for one player
//! - **Task Scheduling** - running a task once after a delay on the host
//!   scheduler
//!
//! ## Design Principles
//!
//! - **Minimal Interface**: Only essential services are exposed
//! - **Type Safety**: All operations are strongly typed
//! - **Async Support**: Packet delivery is non-blocking and async
//! - **No Delivery Guarantees**: Sends are fire-and-forget from the caller's
//!   perspective; there are no retries and no ordering promises across
//!   concurrently mutating callers

use crate::packet::BossBarPacket;
use crate::types::{PlayerId, ProtocolVersion};
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::fmt::Debug;
use std::time::Duration;

/// A unit of work handed to the host scheduler.
pub type ScheduledTask = BoxFuture<'static, ()>;

/// Errors surfaced by host-side operations.
///
/// These describe conditions in the proxy itself (connection table,
/// transport), not invalid arguments from the display layer.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The target player has no active connection.
    #[error("player {0} is not connected")]
    NotConnected(PlayerId),
    /// The transport failed while queueing or writing the packet.
    #[error("network error: {0}")]
    Network(String),
    /// Internal proxy error (resource exhaustion, invalid state, etc.)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Capability surface supplied by the host proxy.
///
/// Display-layer code holds the context as `Arc<dyn ProxyContext>` and uses
/// it for every interaction with the outside world. Implementations are
/// provided by the proxy; tests substitute an in-memory recording context.
///
/// # Examples
///
/// ```rust,no_run
/// use proxy_api::{BossBarAction, BossBarPacket, PlayerId, ProxyContext};
/// use std::sync::Arc;
/// use uuid::Uuid;
///
/// async fn hide_bar(
///     context: Arc<dyn ProxyContext>,
///     bar_id: Uuid,
///     player: PlayerId,
/// ) {
///     let packet = BossBarPacket::new(bar_id, BossBarAction::Remove);
///     if context.send_boss_bar(player, &packet).await.is_err() {
///         // The host reported the player gone; there is nothing to retry.
///     }
/// }
/// ```
#[async_trait]
pub trait ProxyContext: Send + Sync + Debug {
    /// Returns the players currently connected to the proxy.
    ///
    /// The snapshot is taken at call time; players may connect or
    /// disconnect immediately afterwards.
    fn online_players(&self) -> Vec<PlayerId>;

    /// Returns whether the player currently has an active connection.
    fn is_connected(&self, player: PlayerId) -> bool;

    /// Returns the protocol version the player's client negotiated, or
    /// `None` if the player is unknown or disconnected.
    fn protocol_version(&self, player: PlayerId) -> Option<ProtocolVersion>;

    /// Hands one boss bar packet to the protocol layer for delivery to a
    /// single player.
    ///
    /// Returns `Ok(())` once the packet is queued; delivery itself is
    /// asynchronous and unacknowledged.
    async fn send_boss_bar(
        &self,
        player: PlayerId,
        packet: &BossBarPacket,
    ) -> Result<(), ProxyError>;

    /// Runs `task` once after `delay` on the host scheduler.
    ///
    /// The host owns execution: tasks outlive the caller and are dropped
    /// unrun only on proxy shutdown.
    fn schedule(&self, delay: Duration, task: ScheduledTask);
}
