use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use super::exit::describe_exit;
use super::launcher::WorkerLauncher;
use crate::core::config::SupervisorConfig;

/// Pause before retrying a slot whose process could not be spawned
const SPAWN_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Lifecycle of the process in one slot, as seen by the supervisor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Spawning,
    Online,
    Exited,
}

#[derive(Debug, Clone)]
pub struct WorkerSlot {
    pub slot: usize,
    pub state: WorkerState,
    pub pid: Option<u32>,
    /// Number of times the slot's process has exited and been replaced
    pub restarts: u64,
    pub last_exit: Option<String>,
}

/// Read side of the pool, shared with whoever needs to observe it
#[derive(Clone)]
pub struct PoolHandle {
    slots: Arc<RwLock<Vec<WorkerSlot>>>,
}

impl PoolHandle {
    fn new(size: usize) -> Self {
        let slots = (0..size)
            .map(|slot| WorkerSlot {
                slot,
                state: WorkerState::Spawning,
                pid: None,
                restarts: 0,
                last_exit: None,
            })
            .collect();
        Self {
            slots: Arc::new(RwLock::new(slots)),
        }
    }

    pub async fn snapshot(&self) -> Vec<WorkerSlot> {
        self.slots.read().await.clone()
    }

    pub async fn online_count(&self) -> usize {
        self.slots
            .read()
            .await
            .iter()
            .filter(|w| w.state == WorkerState::Online)
            .count()
    }

    /// Log pool health, with a line for every slot that is not serving
    pub async fn report(&self) {
        let slots = self.snapshot().await;
        let restarts: u64 = slots.iter().map(|w| w.restarts).sum();
        tracing::info!(
            "{}/{} workers online, {} restarts so far",
            self.online_count().await,
            slots.len(),
            restarts
        );

        for worker in slots.iter().filter(|w| w.state != WorkerState::Online) {
            tracing::warn!(
                slot = worker.slot,
                state = ?worker.state,
                pid = ?worker.pid,
                last_exit = ?worker.last_exit,
                "Worker slot is not serving"
            );
        }
    }

    async fn update(&self, slot: usize, f: impl FnOnce(&mut WorkerSlot)) {
        if let Some(worker) = self.slots.write().await.get_mut(slot) {
            f(worker);
        }
    }
}

/// Keeps N worker processes alive, replacing any that exit
pub struct WorkerSupervisor<L: WorkerLauncher> {
    launcher: Arc<L>,
    pool: PoolHandle,
    restart_delay: Duration,
}

impl<L: WorkerLauncher> WorkerSupervisor<L> {
    pub fn new(config: &SupervisorConfig, launcher: L) -> Self {
        Self {
            launcher: Arc::new(launcher),
            pool: PoolHandle::new(config.worker_count.max(1)),
            restart_delay: config.restart_delay,
        }
    }

    pub fn handle(&self) -> PoolHandle {
        self.pool.clone()
    }

    /// Supervise every slot. Does not return while the slots are running.
    pub async fn run(self) {
        let size = self.pool.slots.read().await.len();
        tracing::info!("Supervising {} worker slots", size);

        let slots = (0..size).map(|slot| {
            supervise_slot(
                slot,
                Arc::clone(&self.launcher),
                self.pool.clone(),
                self.restart_delay,
            )
        });

        futures::future::join_all(slots).await;
    }
}

async fn supervise_slot<L: WorkerLauncher>(
    slot: usize,
    launcher: Arc<L>,
    pool: PoolHandle,
    restart_delay: Duration,
) {
    loop {
        pool.update(slot, |w| {
            w.state = WorkerState::Spawning;
            w.pid = None;
        })
        .await;

        let mut child = match launcher.launch(slot) {
            Ok(child) => child,
            Err(e) => {
                tracing::error!(slot, "Failed to spawn worker: {}", e);
                tokio::time::sleep(SPAWN_RETRY_DELAY).await;
                continue;
            }
        };

        let pid = child.id();
        pool.update(slot, |w| {
            w.state = WorkerState::Online;
            w.pid = pid;
        })
        .await;
        tracing::info!(slot, "Worker {} is online", pid.unwrap_or_default());

        let reason = match child.wait().await {
            Ok(status) => describe_exit(status),
            Err(e) => format!("wait failed: {}", e),
        };
        tracing::warn!(
            slot,
            "Worker {} died ({}). Restarting...",
            pid.unwrap_or_default(),
            reason
        );
        pool.update(slot, |w| {
            w.state = WorkerState::Exited;
            w.pid = None;
            w.restarts += 1;
            w.last_exit = Some(reason);
        })
        .await;

        if !restart_delay.is_zero() {
            tokio::time::sleep(restart_delay).await;
        }
    }
}
