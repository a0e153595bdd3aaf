//! tokio host for a [`Carousel`]
//!
//! The driver owns the carousel behind a mutex, turns scheduling directives
//! into spawned interval tasks and publishes a fresh [`CarouselSnapshot`]
//! after every message. Each spawned task delivers ticks or frames tagged
//! with its own [`TaskHandle`]; the carousel drops anything that arrives
//! from a chain it no longer owns.

use std::{
    collections::HashMap,
    sync::{Arc, Weak},
    time::Duration,
};

use anyhow::anyhow;
use glide_core::{
    Carousel, CarouselMessage, CarouselSnapshot, Directives, ScheduledTask,
    TaskHandle, TaskKind,
};
use parking_lot::Mutex;
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, trace};

use crate::settings::CarouselSettings;

#[derive(Debug)]
struct Shared {
    carousel: Mutex<Carousel>,
    // Lock order: `carousel` before `tasks`
    tasks: Mutex<HashMap<TaskHandle, JoinHandle<()>>>,
    snapshot_tx: watch::Sender<CarouselSnapshot>,
    frame_interval: Duration,
}

/// Runs one carousel on the current tokio runtime.
///
/// Methods that dispatch messages spawn tasks and must be called from
/// within a runtime.
#[derive(Debug, Clone)]
pub struct CarouselDriver {
    shared: Arc<Shared>,
}

impl CarouselDriver {
    pub fn new(carousel: Carousel, frame_interval: Duration) -> Self {
        let (snapshot_tx, _) = watch::channel(carousel.snapshot());
        Self {
            shared: Arc::new(Shared {
                carousel: Mutex::new(carousel),
                tasks: Mutex::new(HashMap::new()),
                snapshot_tx,
                frame_interval,
            }),
        }
    }

    /// Build a driver for a fresh carousel from loaded settings.
    pub fn from_settings(
        settings: &CarouselSettings,
        container_width: f32,
        item_count: usize,
    ) -> anyhow::Result<Self> {
        let config = settings.to_config().map_err(|err| {
            anyhow!("carousel setting `{}` rejected: {err}", err.key())
        })?;
        let carousel = Carousel::new(config)
            .with_container_width(container_width)
            .with_item_count(item_count);
        Ok(Self::new(carousel, settings.frame_interval()))
    }

    /// Apply a message, run the resulting directives and return the new
    /// snapshot.
    pub fn dispatch(&self, msg: CarouselMessage) -> CarouselSnapshot {
        self.shared.dispatch(msg)
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        self.shared.carousel.lock().snapshot()
    }

    /// Receive every snapshot published after a message is applied.
    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot> {
        self.shared.snapshot_tx.subscribe()
    }

    /// Read the carousel without dispatching anything.
    pub fn with_carousel<R>(&self, f: impl FnOnce(&Carousel) -> R) -> R {
        f(&self.shared.carousel.lock())
    }

    /// Number of timer or frame tasks currently running.
    pub fn active_tasks(&self) -> usize {
        self.shared.tasks.lock().len()
    }

    /// Resolve once the carousel is idle.
    pub async fn wait_until_idle(&self) -> CarouselSnapshot {
        let mut rx = self.subscribe();
        match rx.wait_for(CarouselSnapshot::is_idle).await {
            Ok(snapshot) => snapshot.clone(),
            Err(_) => self.snapshot(),
        }
    }

    /// Halt the carousel where it stands and abort every running task.
    /// The carousel is left idle, so pending `wait_until_idle` calls
    /// resolve.
    pub fn shutdown(&self) {
        let mut carousel = self.shared.carousel.lock();
        let _ = carousel.halt();
        let drained: Vec<_> = self.shared.tasks.lock().drain().collect();
        for (handle, task) in drained {
            task.abort();
            debug!(%handle, "aborted carousel task on shutdown");
        }
        self.shared.snapshot_tx.send_replace(carousel.snapshot());
    }
}

impl Shared {
    fn dispatch(self: &Arc<Self>, msg: CarouselMessage) -> CarouselSnapshot {
        let mut carousel = self.carousel.lock();
        let directives = glide_core::update(&mut carousel, msg);
        self.apply(directives);
        let snapshot = carousel.snapshot();
        self.snapshot_tx.send_replace(snapshot.clone());
        snapshot
    }

    fn apply(self: &Arc<Self>, directives: Directives) {
        if let Some(handle) = directives.cancel
            && let Some(task) = self.tasks.lock().remove(&handle)
        {
            task.abort();
            trace!(%handle, "cancelled carousel task");
        }

        if let Some(task) = directives.schedule {
            let period = match task.kind {
                TaskKind::MomentumTimer { interval } => interval,
                TaskKind::FrameClock => self.frame_interval,
            };
            let join =
                tokio::spawn(run_chain(Arc::downgrade(self), task, period));
            debug!(
                handle = %task.handle,
                kind = ?task.kind,
                ?period,
                "scheduled carousel task"
            );
            self.tasks.lock().insert(task.handle, join);
        }
    }

    fn is_live(&self, handle: TaskHandle) -> bool {
        self.tasks.lock().contains_key(&handle)
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        for (_, task) in self.tasks.get_mut().drain() {
            task.abort();
        }
    }
}

/// Deliver ticks or frames for one chain until it is cancelled or the
/// driver is dropped.
async fn run_chain(
    shared: Weak<Shared>,
    task: ScheduledTask,
    period: Duration,
) {
    let period = period.max(Duration::from_millis(1));
    let mut ticker = time::interval_at(time::Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        let now = ticker.tick().await;
        let Some(shared) = shared.upgrade() else {
            break;
        };
        let msg = match task.kind {
            TaskKind::MomentumTimer { .. } => {
                CarouselMessage::MomentumTick(task.handle)
            }
            TaskKind::FrameClock => {
                CarouselMessage::Frame(task.handle, now.into_std())
            }
        };
        shared.dispatch(msg);
        if !shared.is_live(task.handle) {
            break;
        }
    }
}
