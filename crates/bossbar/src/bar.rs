//! # Boss Bar Entity
//!
//! The in-memory boss bar: display state plus a roster of subscribed
//! viewers. Every mutation recomputes the matching packet variant and
//! re-dispatches it to the current viewers while the bar is visible.
//!
//! ## Dispatch Guard
//!
//! A packet reaches a viewer only if that viewer is currently connected and
//! its client protocol version understands the boss bar packet. Everything
//! else is skipped and logged; sends are never retried and never surface an
//! error to the caller.
//!
//! ## Handle Model
//!
//! [`BossBar`] is a cheap clonable handle over shared state, so delayed
//! tasks and multiple owners can address the same bar. Mutations are still
//! expected from the host's control thread; concurrent mutators get no
//! ordering guarantees between their dispatches.

use crate::builder::BossBarBuilder;
use crate::error::BossBarError;
use crate::style::{flag_mask, BarColor, BarDivision, BarFlag};
use crate::title::BarTitle;
use proxy_api::{BossBarAction, BossBarPacket, PlayerId, ProxyContext, Uuid};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

pub(crate) fn validate_progress(progress: f32) -> Result<(), BossBarError> {
    // NaN fails the first comparison and is rejected with the rest.
    if progress > 0.0 && progress <= 1.0 {
        Ok(())
    } else {
        Err(BossBarError::ProgressOutOfRange(progress))
    }
}

/// Mutable display state behind the bar handle.
#[derive(Debug)]
struct BarState {
    title: BarTitle,
    color: BarColor,
    division: BarDivision,
    flags: HashSet<BarFlag>,
    progress: f32,
    visible: bool,
    viewers: Vec<PlayerId>,
}

/// Point-in-time copy of a bar's display state, for logging and display.
#[derive(Debug, Clone)]
pub struct BarSnapshot {
    pub title: BarTitle,
    pub color: BarColor,
    pub division: BarDivision,
    pub flags: HashSet<BarFlag>,
    pub progress: f32,
    pub visible: bool,
    /// Number of subscribed viewers at snapshot time.
    pub viewers: usize,
}

impl std::fmt::Display for BarSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BossBar(title={}, color={:?}, division={:?}, flags={:?}, progress={}, visible={}, viewers={})",
            self.title,
            self.color,
            self.division,
            self.flags,
            self.progress,
            self.visible,
            self.viewers
        )
    }
}

/// A boss bar shown to a dynamic set of connected players.
///
/// The bar holds its display state (title, color, division, flags,
/// progress, visibility) and a duplicate-free viewer roster. Setter-style
/// operations mutate the state and, while the bar is visible, push the
/// corresponding update packet to every eligible viewer through the host
/// [`ProxyContext`].
///
/// # Examples
///
/// ```rust,no_run
/// use bossbar::{BarColor, BossBar};
/// use proxy_api::{PlayerId, ProxyContext};
/// use std::sync::Arc;
///
/// async fn show_raid_bar(
///     context: Arc<dyn ProxyContext>,
///     player: PlayerId,
/// ) -> Result<(), bossbar::BossBarError> {
///     let bar = BossBar::builder()
///         .title("Raid")
///         .color(BarColor::Red)
///         .progress(0.75)
///         .build(context)
///         .await?;
///     bar.add_player(player).await;
///     Ok(())
/// }
/// ```
///
/// # Lifecycle
///
/// A bar is created with initial display state (directly or via the
/// [`builder`](BossBar::builder)), mutated through its setters, and
/// conceptually destroyed by [`remove_all_players`](BossBar::remove_all_players).
/// No state survives the process.
#[derive(Debug, Clone)]
pub struct BossBar {
    id: Uuid,
    state: Arc<RwLock<BarState>>,
    context: Arc<dyn ProxyContext>,
}

impl BossBar {
    /// Creates a bar with the given display state: visible, no flags, no
    /// viewers, fresh UUID.
    ///
    /// # Errors
    ///
    /// Returns [`BossBarError::ProgressOutOfRange`] unless `progress` lies
    /// in `(0.0, 1.0]`.
    pub fn new(
        context: Arc<dyn ProxyContext>,
        title: impl Into<BarTitle>,
        color: BarColor,
        division: BarDivision,
        progress: f32,
    ) -> Result<Self, BossBarError> {
        validate_progress(progress)?;
        Ok(Self::assemble(context, title.into(), color, division, progress))
    }

    /// Creates a full, pink, solid bar with the given title.
    pub fn with_title(context: Arc<dyn ProxyContext>, title: impl Into<BarTitle>) -> Self {
        Self::assemble(
            context,
            title.into(),
            BarColor::default(),
            BarDivision::default(),
            1.0,
        )
    }

    fn assemble(
        context: Arc<dyn ProxyContext>,
        title: BarTitle,
        color: BarColor,
        division: BarDivision,
        progress: f32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: Arc::new(RwLock::new(BarState {
                title,
                color,
                division,
                flags: HashSet::new(),
                progress,
                visible: true,
                viewers: Vec::new(),
            })),
            context,
        }
    }

    /// Creates a builder with the default display state.
    pub fn builder() -> BossBarBuilder {
        BossBarBuilder::default()
    }

    /// The bar's wire identity. All packets for this bar carry it.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub(crate) fn context(&self) -> &Arc<dyn ProxyContext> {
        &self.context
    }

    /// Returns a copy of the current display state.
    pub async fn snapshot(&self) -> BarSnapshot {
        let state = self.state.read().await;
        BarSnapshot {
            title: state.title.clone(),
            color: state.color,
            division: state.division,
            flags: state.flags.clone(),
            progress: state.progress,
            visible: state.visible,
            viewers: state.viewers.len(),
        }
    }

    // === Viewer roster ===

    /// Returns a snapshot of the viewer roster.
    pub async fn players(&self) -> Vec<PlayerId> {
        self.state.read().await.viewers.clone()
    }

    /// Subscribes a player to the bar. While the bar is visible, an
    /// eligible new viewer immediately receives the full Add packet.
    ///
    /// Adding a player already on the roster changes nothing and sends
    /// nothing.
    pub async fn add_player(&self, player: PlayerId) {
        let packet = {
            let mut state = self.state.write().await;
            if state.viewers.contains(&player) {
                return;
            }
            state.viewers.push(player);
            if !state.visible {
                return;
            }
            self.add_packet(&state)
        };
        self.send_to(player, &packet).await;
    }

    /// Subscribes every player in the iterator, in order.
    pub async fn add_players(&self, players: impl IntoIterator<Item = PlayerId>) {
        for player in players {
            self.add_player(player).await;
        }
    }

    /// Subscribes every player currently connected to the proxy.
    pub async fn add_online_players(&self) {
        self.add_players(self.context.online_players()).await;
    }

    /// Unsubscribes a player. A removed viewer receives the Remove packet
    /// while the bar is visible (an invisible bar was already removed from
    /// its clients). Removing an absent player is a no-op.
    pub async fn remove_player(&self, player: PlayerId) {
        let packet = {
            let mut state = self.state.write().await;
            let Some(index) = state.viewers.iter().position(|p| *p == player) else {
                return;
            };
            state.viewers.remove(index);
            if !state.visible {
                return;
            }
            self.remove_packet()
        };
        self.send_to(player, &packet).await;
    }

    /// Unsubscribes every player in the iterator, in order.
    pub async fn remove_players(&self, players: impl IntoIterator<Item = PlayerId>) {
        for player in players {
            self.remove_player(player).await;
        }
    }

    /// Empties the roster, removing the bar from every viewer's screen.
    /// This is the bar's conceptual destruction; the handle itself stays
    /// usable.
    pub async fn remove_all_players(&self) {
        let (viewers, packet) = {
            let mut state = self.state.write().await;
            let viewers = std::mem::take(&mut state.viewers);
            if !state.visible {
                return;
            }
            (viewers, self.remove_packet())
        };
        self.broadcast(&viewers, &packet).await;
    }

    // === Display state ===

    /// Returns the current title.
    pub async fn title(&self) -> BarTitle {
        self.state.read().await.title.clone()
    }

    /// Sets the title and re-dispatches it to current viewers.
    pub async fn set_title(&self, title: impl Into<BarTitle>) {
        let dispatch = {
            let mut state = self.state.write().await;
            state.title = title.into();
            state.visible.then(|| {
                let packet = BossBarPacket::new(
                    self.id,
                    BossBarAction::UpdateTitle {
                        title: state.title.as_component(),
                    },
                );
                (state.viewers.clone(), packet)
            })
        };
        if let Some((viewers, packet)) = dispatch {
            self.broadcast(&viewers, &packet).await;
        }
    }

    /// Returns the current progress, a value in `(0.0, 1.0]`.
    pub async fn progress(&self) -> f32 {
        self.state.read().await.progress
    }

    /// Sets the fill fraction of the bar and re-dispatches it.
    ///
    /// # Errors
    ///
    /// Returns [`BossBarError::ProgressOutOfRange`] unless `progress` lies
    /// in `(0.0, 1.0]`; the bar is left untouched and nothing is sent.
    pub async fn set_progress(&self, progress: f32) -> Result<(), BossBarError> {
        validate_progress(progress)?;
        let dispatch = {
            let mut state = self.state.write().await;
            state.progress = progress;
            state.visible.then(|| {
                let packet = BossBarPacket::new(
                    self.id,
                    BossBarAction::UpdateHealth { health: progress },
                );
                (state.viewers.clone(), packet)
            })
        };
        if let Some((viewers, packet)) = dispatch {
            self.broadcast(&viewers, &packet).await;
        }
        Ok(())
    }

    /// Returns the current color.
    pub async fn color(&self) -> BarColor {
        self.state.read().await.color
    }

    /// Sets the color. The wire carries color and division in one action,
    /// so the current division is resent alongside.
    pub async fn set_color(&self, color: BarColor) {
        let dispatch = {
            let mut state = self.state.write().await;
            state.color = color;
            state
                .visible
                .then(|| (state.viewers.clone(), self.style_packet(&state)))
        };
        if let Some((viewers, packet)) = dispatch {
            self.broadcast(&viewers, &packet).await;
        }
    }

    /// Returns the current division.
    pub async fn division(&self) -> BarDivision {
        self.state.read().await.division
    }

    /// Sets the division (overlay). The current color is resent alongside.
    pub async fn set_division(&self, division: BarDivision) {
        let dispatch = {
            let mut state = self.state.write().await;
            state.division = division;
            state
                .visible
                .then(|| (state.viewers.clone(), self.style_packet(&state)))
        };
        if let Some((viewers, packet)) = dispatch {
            self.broadcast(&viewers, &packet).await;
        }
    }

    /// Returns the current flag set.
    pub async fn flags(&self) -> HashSet<BarFlag> {
        self.state.read().await.flags.clone()
    }

    /// Enables one flag.
    pub async fn add_flag(&self, flag: BarFlag) {
        self.add_flags([flag]).await;
    }

    /// Enables a set of flags. The flag mask is re-dispatched only when the
    /// set actually changed.
    pub async fn add_flags(&self, flags: impl IntoIterator<Item = BarFlag>) {
        let dispatch = {
            let mut state = self.state.write().await;
            let mut changed = false;
            for flag in flags {
                changed |= state.flags.insert(flag);
            }
            if !changed {
                return;
            }
            state
                .visible
                .then(|| (state.viewers.clone(), self.flags_packet(&state)))
        };
        if let Some((viewers, packet)) = dispatch {
            self.broadcast(&viewers, &packet).await;
        }
    }

    /// Disables one flag.
    pub async fn remove_flag(&self, flag: BarFlag) {
        self.remove_flags([flag]).await;
    }

    /// Disables a set of flags. The flag mask is re-dispatched only when
    /// the set actually changed.
    pub async fn remove_flags(&self, flags: impl IntoIterator<Item = BarFlag>) {
        let dispatch = {
            let mut state = self.state.write().await;
            let mut changed = false;
            for flag in flags {
                changed |= state.flags.remove(&flag);
            }
            if !changed {
                return;
            }
            state
                .visible
                .then(|| (state.viewers.clone(), self.flags_packet(&state)))
        };
        if let Some((viewers, packet)) = dispatch {
            self.broadcast(&viewers, &packet).await;
        }
    }

    /// Returns whether the bar is currently visible.
    pub async fn visible(&self) -> bool {
        self.state.read().await.visible
    }

    /// Shows or hides the bar for all current viewers. Turning visibility
    /// off sends Remove and stops all further dispatch; turning it back on
    /// resends the full Add packet. Setting the current value is a no-op.
    pub async fn set_visible(&self, visible: bool) {
        let (viewers, packet) = {
            let mut state = self.state.write().await;
            if state.visible == visible {
                return;
            }
            state.visible = visible;
            let packet = if visible {
                self.add_packet(&state)
            } else {
                self.remove_packet()
            };
            (state.viewers.clone(), packet)
        };
        self.broadcast(&viewers, &packet).await;
    }

    // === Delayed conveniences ===
    //
    // Each hands exactly one task to the host scheduler; execution is
    // entirely the host's concern.

    /// Subscribes the player once `delay` has elapsed.
    pub fn add_player_after(&self, player: PlayerId, delay: Duration) {
        let bar = self.clone();
        self.context.schedule(
            delay,
            Box::pin(async move {
                bar.add_player(player).await;
            }),
        );
    }

    /// Subscribes everyone online at execution time once `delay` has
    /// elapsed.
    pub fn add_online_players_after(&self, delay: Duration) {
        let bar = self.clone();
        self.context.schedule(
            delay,
            Box::pin(async move {
                bar.add_online_players().await;
            }),
        );
    }

    /// Unsubscribes the player once `delay` has elapsed.
    pub fn remove_player_after(&self, player: PlayerId, delay: Duration) {
        let bar = self.clone();
        self.context.schedule(
            delay,
            Box::pin(async move {
                bar.remove_player(player).await;
            }),
        );
    }

    /// Empties the roster once `delay` has elapsed.
    pub fn remove_all_players_after(&self, delay: Duration) {
        let bar = self.clone();
        self.context.schedule(
            delay,
            Box::pin(async move {
                bar.remove_all_players().await;
            }),
        );
    }

    // === Packet construction and dispatch ===

    fn add_packet(&self, state: &BarState) -> BossBarPacket {
        BossBarPacket::new(
            self.id,
            BossBarAction::Add {
                title: state.title.as_component(),
                health: state.progress,
                color: state.color.protocol_id(),
                division: state.division.protocol_id(),
                flags: flag_mask(state.flags.iter().copied()),
            },
        )
    }

    fn remove_packet(&self) -> BossBarPacket {
        BossBarPacket::new(self.id, BossBarAction::Remove)
    }

    fn style_packet(&self, state: &BarState) -> BossBarPacket {
        BossBarPacket::new(
            self.id,
            BossBarAction::UpdateStyle {
                color: state.color.protocol_id(),
                division: state.division.protocol_id(),
            },
        )
    }

    fn flags_packet(&self, state: &BarState) -> BossBarPacket {
        BossBarPacket::new(
            self.id,
            BossBarAction::UpdateFlags {
                flags: flag_mask(state.flags.iter().copied()),
            },
        )
    }

    async fn broadcast(&self, viewers: &[PlayerId], packet: &BossBarPacket) {
        for player in viewers {
            self.send_to(*player, packet).await;
        }
    }

    /// Sends one packet to one viewer, applying the per-player guard:
    /// connected, and on a client version that has the packet.
    async fn send_to(&self, player: PlayerId, packet: &BossBarPacket) {
        if !self.context.is_connected(player) {
            debug!(%player, bar = %self.id, "skipping boss bar send, player not connected");
            return;
        }
        match self.context.protocol_version(player) {
            Some(version) if version.supports_boss_bars() => {
                if let Err(error) = self.context.send_boss_bar(player, packet).await {
                    warn!(%player, bar = %self.id, %error, "boss bar send failed");
                }
            }
            Some(version) => {
                debug!(%player, %version, bar = %self.id, "client too old for boss bars");
            }
            None => {
                debug!(%player, bar = %self.id, "no protocol version recorded, skipping");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockProxy;
    use proxy_api::ProtocolVersion;

    fn bar_on(proxy: &Arc<MockProxy>) -> BossBar {
        BossBar::with_title(proxy.clone(), "test bar")
    }

    #[tokio::test]
    async fn test_new_rejects_bad_progress() {
        let proxy = MockProxy::arc();
        for progress in [0.0, -0.5, 1.01, f32::NAN] {
            let result = BossBar::new(
                proxy.clone(),
                "bad",
                BarColor::Red,
                BarDivision::Solid,
                progress,
            );
            assert!(matches!(
                result,
                Err(BossBarError::ProgressOutOfRange(_))
            ));
        }
        assert!(BossBar::new(
            proxy.clone(),
            "edge",
            BarColor::Red,
            BarDivision::Solid,
            1.0
        )
        .is_ok());
    }

    #[tokio::test]
    async fn test_set_progress_rejects_and_preserves_state() {
        let proxy = MockProxy::arc();
        let bar = bar_on(&proxy);
        bar.set_progress(0.4).await.unwrap();

        assert!(bar.set_progress(0.0).await.is_err());
        assert!(bar.set_progress(1.5).await.is_err());
        assert_eq!(bar.progress().await, 0.4);
        // The two rejected calls must not have dispatched anything.
        assert_eq!(proxy.sent().len(), 0);
    }

    #[tokio::test]
    async fn test_add_player_sends_full_add() {
        let proxy = MockProxy::arc();
        let player = proxy.connect(ProtocolVersion::MINECRAFT_1_12_2);
        let bar = bar_on(&proxy);
        bar.set_progress(0.5).await.unwrap();
        bar.add_player(player).await;

        let sent = proxy.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, player);
        assert_eq!(sent[0].1.bar_id, bar.id());
        match &sent[0].1.action {
            BossBarAction::Add {
                health,
                color,
                division,
                flags,
                ..
            } => {
                assert_eq!(*health, 0.5);
                assert_eq!(*color, BarColor::Pink.protocol_id());
                assert_eq!(*division, BarDivision::Solid.protocol_id());
                assert_eq!(*flags, 0);
            }
            other => panic!("expected Add, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_duplicate_add_is_ignored() {
        let proxy = MockProxy::arc();
        let player = proxy.connect(ProtocolVersion::MINECRAFT_1_9);
        let bar = bar_on(&proxy);
        bar.add_player(player).await;
        bar.add_player(player).await;

        assert_eq!(bar.players().await, vec![player]);
        assert_eq!(proxy.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_guard_skips_old_and_disconnected() {
        let proxy = MockProxy::arc();
        let legacy = proxy.connect(ProtocolVersion::MINECRAFT_1_8);
        let offline = proxy.connect(ProtocolVersion::MINECRAFT_1_9);
        proxy.disconnect(offline);
        let modern = proxy.connect(ProtocolVersion::MINECRAFT_1_16_5);

        let bar = bar_on(&proxy);
        bar.add_players([legacy, offline, modern]).await;

        // All three are on the roster, only the modern client was sent to.
        assert_eq!(bar.players().await.len(), 3);
        let sent = proxy.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, modern);
    }

    #[tokio::test]
    async fn test_visibility_gates_dispatch() {
        let proxy = MockProxy::arc();
        let player = proxy.connect(ProtocolVersion::MINECRAFT_1_9);
        let bar = bar_on(&proxy);
        bar.add_player(player).await;
        proxy.clear_sent();

        // Hide: one Remove goes out, then mutations go quiet.
        bar.set_visible(false).await;
        assert_eq!(proxy.sent().len(), 1);
        assert!(matches!(proxy.sent()[0].1.action, BossBarAction::Remove));
        proxy.clear_sent();

        bar.set_title("hidden update").await;
        bar.set_progress(0.2).await.unwrap();
        bar.set_color(BarColor::White).await;
        assert_eq!(proxy.sent().len(), 0);

        // Show again: the full Add resumes dispatch with current state.
        bar.set_visible(true).await;
        let sent = proxy.sent();
        assert_eq!(sent.len(), 1);
        match &sent[0].1.action {
            BossBarAction::Add { health, color, .. } => {
                assert_eq!(*health, 0.2);
                assert_eq!(*color, BarColor::White.protocol_id());
            }
            other => panic!("expected Add, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_set_visible_same_value_is_noop() {
        let proxy = MockProxy::arc();
        let player = proxy.connect(ProtocolVersion::MINECRAFT_1_9);
        let bar = bar_on(&proxy);
        bar.add_player(player).await;
        proxy.clear_sent();

        bar.set_visible(true).await;
        assert_eq!(proxy.sent().len(), 0);
    }

    #[tokio::test]
    async fn test_remove_all_players_empties_roster() {
        let proxy = MockProxy::arc();
        let a = proxy.connect(ProtocolVersion::MINECRAFT_1_9);
        let b = proxy.connect(ProtocolVersion::MINECRAFT_1_9);
        let bar = bar_on(&proxy);
        bar.add_players([a, b]).await;
        proxy.clear_sent();

        bar.remove_all_players().await;
        assert!(bar.players().await.is_empty());
        let sent = proxy.sent();
        assert_eq!(sent.len(), 2);
        assert!(sent
            .iter()
            .all(|(_, packet)| matches!(packet.action, BossBarAction::Remove)));
    }

    #[tokio::test]
    async fn test_remove_absent_player_sends_nothing() {
        let proxy = MockProxy::arc();
        let stranger = proxy.connect(ProtocolVersion::MINECRAFT_1_9);
        let bar = bar_on(&proxy);

        bar.remove_player(stranger).await;
        assert_eq!(proxy.sent().len(), 0);
    }

    #[tokio::test]
    async fn test_style_updates_carry_both_fields() {
        let proxy = MockProxy::arc();
        let player = proxy.connect(ProtocolVersion::MINECRAFT_1_9);
        let bar = bar_on(&proxy);
        bar.add_player(player).await;
        bar.set_division(BarDivision::Segments20).await;
        proxy.clear_sent();

        bar.set_color(BarColor::Green).await;
        let sent = proxy.sent();
        assert_eq!(sent.len(), 1);
        match sent[0].1.action {
            BossBarAction::UpdateStyle { color, division } => {
                assert_eq!(color, BarColor::Green.protocol_id());
                assert_eq!(division, BarDivision::Segments20.protocol_id());
            }
            ref other => panic!("expected UpdateStyle, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_flag_updates_only_on_change() {
        let proxy = MockProxy::arc();
        let player = proxy.connect(ProtocolVersion::MINECRAFT_1_9);
        let bar = bar_on(&proxy);
        bar.add_player(player).await;
        proxy.clear_sent();

        bar.add_flag(BarFlag::DarkenScreen).await;
        assert_eq!(proxy.sent().len(), 1);

        // Same flag again: no change, no packet.
        bar.add_flag(BarFlag::DarkenScreen).await;
        assert_eq!(proxy.sent().len(), 1);

        bar.add_flags([BarFlag::DarkenScreen, BarFlag::PlayBossMusic])
            .await;
        let sent = proxy.sent();
        assert_eq!(sent.len(), 2);
        match sent[1].1.action {
            BossBarAction::UpdateFlags { flags } => assert_eq!(flags, 0x3),
            ref other => panic!("expected UpdateFlags, got {other:?}"),
        }

        bar.remove_flag(BarFlag::CreateWorldFog).await;
        assert_eq!(proxy.sent().len(), 2);

        bar.remove_flags([BarFlag::DarkenScreen, BarFlag::PlayBossMusic])
            .await;
        let sent = proxy.sent();
        assert_eq!(sent.len(), 3);
        match sent[2].1.action {
            BossBarAction::UpdateFlags { flags } => assert_eq!(flags, 0),
            ref other => panic!("expected UpdateFlags, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_add_online_players() {
        let proxy = MockProxy::arc();
        let a = proxy.connect(ProtocolVersion::MINECRAFT_1_9);
        let b = proxy.connect(ProtocolVersion::MINECRAFT_1_12_2);
        let gone = proxy.connect(ProtocolVersion::MINECRAFT_1_9);
        proxy.disconnect(gone);

        let bar = bar_on(&proxy);
        bar.add_online_players().await;

        let roster = bar.players().await;
        assert_eq!(roster.len(), 2);
        assert!(roster.contains(&a) && roster.contains(&b));
    }

    #[tokio::test]
    async fn test_scheduled_add_runs_through_host_scheduler() {
        let proxy = MockProxy::arc();
        let player = proxy.connect(ProtocolVersion::MINECRAFT_1_9);
        let bar = bar_on(&proxy);

        bar.add_player_after(player, Duration::from_secs(3));
        // Nothing happens until the host runs the task.
        assert!(bar.players().await.is_empty());
        assert_eq!(proxy.scheduled_delays(), vec![Duration::from_secs(3)]);

        proxy.run_scheduled().await;
        assert_eq!(bar.players().await, vec![player]);
        assert_eq!(proxy.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_scheduled_remove_all() {
        let proxy = MockProxy::arc();
        let player = proxy.connect(ProtocolVersion::MINECRAFT_1_9);
        let bar = bar_on(&proxy);
        bar.add_player(player).await;

        bar.remove_all_players_after(Duration::from_millis(250));
        assert_eq!(bar.players().await.len(), 1);

        proxy.run_scheduled().await;
        assert!(bar.players().await.is_empty());
    }

    #[tokio::test]
    async fn test_send_failure_is_swallowed() {
        let proxy = MockProxy::arc();
        let player = proxy.connect(ProtocolVersion::MINECRAFT_1_9);
        proxy.fail_sends(true);

        let bar = bar_on(&proxy);
        bar.add_player(player).await;

        // The failure is logged, not propagated; the roster still grew.
        assert_eq!(bar.players().await, vec![player]);
        assert_eq!(proxy.sent().len(), 0);
    }

    #[tokio::test]
    async fn test_snapshot_reflects_state() {
        let proxy = MockProxy::arc();
        let player = proxy.connect(ProtocolVersion::MINECRAFT_1_9);
        let bar = bar_on(&proxy);
        bar.add_player(player).await;
        bar.set_color(BarColor::Blue).await;
        bar.add_flag(BarFlag::CreateWorldFog).await;

        let snapshot = bar.snapshot().await;
        assert_eq!(snapshot.color, BarColor::Blue);
        assert_eq!(snapshot.viewers, 1);
        assert!(snapshot.visible);
        assert!(snapshot.flags.contains(&BarFlag::CreateWorldFog));
        let rendered = snapshot.to_string();
        assert!(rendered.contains("test bar"));
        assert!(rendered.contains("viewers=1"));
    }
}
