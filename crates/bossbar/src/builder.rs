//! Builder for ergonomic boss bar construction.

use crate::bar::{validate_progress, BossBar};
use crate::error::BossBarError;
use crate::style::{BarColor, BarDivision, BarFlag};
use crate::title::BarTitle;
use proxy_api::{ChatColor, PlayerId, ProxyContext};
use std::collections::HashSet;
use std::sync::Arc;

/// Staged configuration for a [`BossBar`].
///
/// Defaults: a yellow "Title not specified" title, pink, solid, no flags,
/// full progress, visible, no players. [`build`](BossBarBuilder::build)
/// validates progress, constructs the bar and applies the staged pieces in
/// order (flags, visibility, players), so a bar built invisible sends
/// nothing to its staged players.
///
/// # Examples
///
/// ```rust,no_run
/// use bossbar::{BarColor, BarDivision, BarFlag, BossBar};
/// use proxy_api::{PlayerId, ProxyContext};
/// use std::sync::Arc;
///
/// async fn dragon_bar(
///     context: Arc<dyn ProxyContext>,
///     fighters: Vec<PlayerId>,
/// ) -> Result<BossBar, bossbar::BossBarError> {
///     BossBar::builder()
///         .title("Ender Dragon")
///         .color(BarColor::Purple)
///         .division(BarDivision::Segments10)
///         .flag(BarFlag::PlayBossMusic)
///         .players(fighters)
///         .build(context)
///         .await
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BossBarBuilder {
    title: BarTitle,
    color: BarColor,
    division: BarDivision,
    flags: HashSet<BarFlag>,
    progress: f32,
    visible: bool,
    players: Vec<PlayerId>,
}

impl Default for BossBarBuilder {
    fn default() -> Self {
        Self {
            title: BarTitle::builder()
                .text("Title not specified")
                .color(ChatColor::Yellow)
                .build(),
            color: BarColor::default(),
            division: BarDivision::default(),
            flags: HashSet::new(),
            progress: 1.0,
            visible: true,
            players: Vec::new(),
        }
    }
}

impl BossBarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bar title.
    pub fn title(mut self, title: impl Into<BarTitle>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the bar color.
    pub fn color(mut self, color: BarColor) -> Self {
        self.color = color;
        self
    }

    /// Sets the bar division (overlay).
    pub fn division(mut self, division: BarDivision) -> Self {
        self.division = division;
        self
    }

    /// Stages one screen-effect flag.
    pub fn flag(mut self, flag: BarFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    /// Stages a set of screen-effect flags.
    pub fn flags(mut self, flags: impl IntoIterator<Item = BarFlag>) -> Self {
        self.flags.extend(flags);
        self
    }

    /// Sets the initial progress. Validated at [`build`](Self::build).
    pub fn progress(mut self, progress: f32) -> Self {
        self.progress = progress;
        self
    }

    /// Sets the initial visibility.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Stages one initial viewer.
    pub fn player(mut self, player: PlayerId) -> Self {
        self.players.push(player);
        self
    }

    /// Stages a set of initial viewers.
    pub fn players(mut self, players: impl IntoIterator<Item = PlayerId>) -> Self {
        self.players.extend(players);
        self
    }

    /// Builds the bar against the given host context.
    ///
    /// # Errors
    ///
    /// Returns [`BossBarError::ProgressOutOfRange`] unless the staged
    /// progress lies in `(0.0, 1.0]`.
    pub async fn build(self, context: Arc<dyn ProxyContext>) -> Result<BossBar, BossBarError> {
        validate_progress(self.progress)?;
        let bar = BossBar::new(context, self.title, self.color, self.division, self.progress)?;
        bar.add_flags(self.flags).await;
        bar.set_visible(self.visible).await;
        bar.add_players(self.players).await;
        Ok(bar)
    }
}
