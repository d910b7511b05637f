//! # Boss Bar Display Layer
//!
//! An in-memory boss bar abstraction for the proxy: a progress overlay
//! (title, color, division, progress, flags, visibility) shown to a dynamic
//! roster of connected players. The proxy owns connections, packet delivery
//! and scheduling; this crate owns the object model and decides, on every
//! mutation, which of the six fixed packet variants goes to which viewer.
//!
//! ## Overview
//!
//! - [`BossBar`] - the bar entity; setter-style mutations re-dispatch to
//!   current viewers while the bar is visible
//! - [`BossBarBuilder`] - staged construction
//! - [`BarTitle`] / [`TitleBuilder`] - plain or styled rich-text titles
//! - [`BarColor`] / [`BarDivision`] / [`BarFlag`] - display enums with
//!   fixed protocol mappings
//! - [`BossBarRegistry`] / [`KeyedBossBar`] - bars addressable by key
//!
//! ## Dispatch Rules
//!
//! A packet reaches a viewer only while the bar is visible and only if the
//! viewer is connected on a client version that has the boss bar packet
//! (1.9 and later). Send failures are logged and swallowed; there are no
//! retries and no delivery guarantees beyond what the host provides.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bossbar::{BarColor, BarFlag, BossBar};
//! use proxy_api::ProxyContext;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! async fn blood_moon(context: Arc<dyn ProxyContext>) -> Result<(), bossbar::BossBarError> {
//!     let bar = BossBar::builder()
//!         .title("Blood Moon rises...")
//!         .color(BarColor::Red)
//!         .flag(BarFlag::DarkenScreen)
//!         .build(context)
//!         .await?;
//!     bar.add_online_players().await;
//!     bar.remove_all_players_after(Duration::from_secs(60));
//!     Ok(())
//! }
//! ```

pub mod bar;
pub mod builder;
pub mod error;
pub mod registry;
pub mod style;
pub mod title;

#[cfg(test)]
mod testing;

pub use bar::{BarSnapshot, BossBar};
pub use builder::BossBarBuilder;
pub use error::BossBarError;
pub use registry::{BarKey, BossBarRegistry, KeyedBossBar};
pub use style::{flag_mask, BarColor, BarDivision, BarFlag};
pub use title::{BarTitle, TitleBuilder};
