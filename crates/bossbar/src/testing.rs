//! In-memory recording [`ProxyContext`] used across the crate's tests.

use async_trait::async_trait;
use proxy_api::{
    BossBarPacket, PlayerId, ProtocolVersion, ProxyContext, ProxyError, ScheduledTask,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct Connection {
    connected: bool,
    version: ProtocolVersion,
}

/// Mock proxy recording every packet and scheduled task instead of
/// touching a network. Scheduled tasks run only when the test calls
/// [`run_scheduled`](MockProxy::run_scheduled).
#[derive(Default)]
pub(crate) struct MockProxy {
    connections: Mutex<HashMap<PlayerId, Connection>>,
    sent: Mutex<Vec<(PlayerId, BossBarPacket)>>,
    scheduled: Mutex<Vec<(Duration, ScheduledTask)>>,
    fail_sends: AtomicBool,
}

impl MockProxy {
    pub(crate) fn arc() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Registers a new connected player on the given protocol version.
    pub(crate) fn connect(&self, version: ProtocolVersion) -> PlayerId {
        let player = PlayerId::new();
        self.connections.lock().unwrap().insert(
            player,
            Connection {
                connected: true,
                version,
            },
        );
        player
    }

    /// Marks the player as disconnected without forgetting it.
    pub(crate) fn disconnect(&self, player: PlayerId) {
        if let Some(connection) = self.connections.lock().unwrap().get_mut(&player) {
            connection.connected = false;
        }
    }

    /// Makes every subsequent send fail with a network error.
    pub(crate) fn fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn sent(&self) -> Vec<(PlayerId, BossBarPacket)> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn clear_sent(&self) {
        self.sent.lock().unwrap().clear();
    }

    pub(crate) fn scheduled_delays(&self) -> Vec<Duration> {
        self.scheduled
            .lock()
            .unwrap()
            .iter()
            .map(|(delay, _)| *delay)
            .collect()
    }

    /// Drains and runs every scheduled task, oldest first.
    pub(crate) async fn run_scheduled(&self) {
        let tasks: Vec<_> = self.scheduled.lock().unwrap().drain(..).collect();
        for (_, task) in tasks {
            task.await;
        }
    }
}

impl std::fmt::Debug for MockProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockProxy")
            .field("connections", &self.connections.lock().unwrap().len())
            .field("sent", &self.sent.lock().unwrap().len())
            .field("scheduled", &self.scheduled.lock().unwrap().len())
            .finish()
    }
}

#[async_trait]
impl ProxyContext for MockProxy {
    fn online_players(&self) -> Vec<PlayerId> {
        self.connections
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, connection)| connection.connected)
            .map(|(player, _)| *player)
            .collect()
    }

    fn is_connected(&self, player: PlayerId) -> bool {
        self.connections
            .lock()
            .unwrap()
            .get(&player)
            .is_some_and(|connection| connection.connected)
    }

    fn protocol_version(&self, player: PlayerId) -> Option<ProtocolVersion> {
        self.connections
            .lock()
            .unwrap()
            .get(&player)
            .filter(|connection| connection.connected)
            .map(|connection| connection.version)
    }

    async fn send_boss_bar(
        &self,
        player: PlayerId,
        packet: &BossBarPacket,
    ) -> Result<(), ProxyError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(ProxyError::Network("mock send failure".to_owned()));
        }
        if !self.is_connected(player) {
            return Err(ProxyError::NotConnected(player));
        }
        self.sent.lock().unwrap().push((player, packet.clone()));
        Ok(())
    }

    fn schedule(&self, delay: Duration, task: ScheduledTask) {
        self.scheduled.lock().unwrap().push((delay, task));
    }
}
