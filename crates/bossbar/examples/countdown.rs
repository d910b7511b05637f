//! Drives a countdown bar against a toy in-process host, printing every
//! packet the proxy would deliver.
//!
//! ```text
//! cargo run -p bossbar --example countdown
//! ```

use async_trait::async_trait;
use bossbar::{BarColor, BarDivision, BossBar};
use proxy_api::{
    BossBarPacket, PlayerId, ProtocolVersion, ProxyContext, ProxyError, ScheduledTask,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Minimal host: three players hardcoded online, packets printed, and a
/// real tokio timer behind the scheduling primitive.
#[derive(Debug)]
struct ToyProxy {
    players: Vec<(PlayerId, ProtocolVersion)>,
}

impl ToyProxy {
    fn new() -> Self {
        Self {
            players: vec![
                (PlayerId::new(), ProtocolVersion::MINECRAFT_1_8),
                (PlayerId::new(), ProtocolVersion::MINECRAFT_1_12_2),
                (PlayerId::new(), ProtocolVersion::MINECRAFT_1_21),
            ],
        }
    }
}

#[async_trait]
impl ProxyContext for ToyProxy {
    fn online_players(&self) -> Vec<PlayerId> {
        self.players.iter().map(|(player, _)| *player).collect()
    }

    fn is_connected(&self, player: PlayerId) -> bool {
        self.players.iter().any(|(p, _)| *p == player)
    }

    fn protocol_version(&self, player: PlayerId) -> Option<ProtocolVersion> {
        self.players
            .iter()
            .find(|(p, _)| *p == player)
            .map(|(_, version)| *version)
    }

    async fn send_boss_bar(
        &self,
        player: PlayerId,
        packet: &BossBarPacket,
    ) -> Result<(), ProxyError> {
        info!(%player, action = packet.action.action_id(), "deliver {:?}", packet.action);
        Ok(())
    }

    fn schedule(&self, delay: Duration, task: ScheduledTask) {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let proxy = Arc::new(ToyProxy::new());
    let bar = BossBar::builder()
        .title("Restart in 5 seconds")
        .color(BarColor::Red)
        .division(BarDivision::Segments10)
        .build(proxy.clone())
        .await?;

    // The 1.8 client on the roster is skipped by the dispatch guard.
    bar.add_online_players().await;

    for remaining in (1..=5).rev() {
        bar.set_title(format!("Restart in {remaining} seconds")).await;
        bar.set_progress(remaining as f32 / 5.0).await?;
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    bar.remove_all_players().await;
    info!("bar dismissed, {} viewers remain", bar.players().await.len());
    Ok(())
}
