//! Animation scheduler
//!
//! The scheduler is the frame source for every animation in a window. Each
//! animation owns a [`Ticker`], a registration that accumulates frame time
//! while active. The host calls [`AnimationScheduler::tick`] once per frame
//! and keeps scheduling frames while [`AnimationScheduler::has_active_tickers`]
//! is true.
//!
//! Everything here is single-threaded: the scheduler is shared through `Rc`
//! and is neither `Send` nor `Sync`.

use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

new_key_type! {
    pub struct TickerId;
}

struct TickerSlot {
    label: &'static str,
    active: bool,
    elapsed: Duration,
}

struct SchedulerInner {
    tickers: SlotMap<TickerId, TickerSlot>,
    last_frame: Option<Instant>,
    frame: u64,
}

/// The frame source that ticks all active tickers
#[derive(Clone)]
pub struct AnimationScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner {
                tickers: SlotMap::with_key(),
                last_frame: None,
                frame: 0,
            })),
        }
    }

    /// Allocate a ticker. It starts inactive and is released when dropped.
    pub fn create_ticker(&self, label: &'static str) -> Ticker {
        let id = self.inner.borrow_mut().tickers.insert(TickerSlot {
            label,
            active: false,
            elapsed: Duration::ZERO,
        });
        tracing::debug!(?id, label, "ticker allocated");

        Ticker {
            id,
            scheduler: Rc::downgrade(&self.inner),
        }
    }

    /// Advance every active ticker by `dt`. Returns how many were advanced.
    pub fn tick(&self, dt: Duration) -> usize {
        let mut inner = self.inner.borrow_mut();
        inner.frame += 1;

        let mut advanced = 0;
        for (_, slot) in inner.tickers.iter_mut().filter(|(_, s)| s.active) {
            slot.elapsed += dt;
            advanced += 1;
        }

        tracing::trace!(frame = inner.frame, ?dt, advanced, "scheduler tick");
        advanced
    }

    /// Advance by the wall-clock time since the previous `tick_now` call.
    ///
    /// The first call only records the frame time.
    pub fn tick_now(&self) -> usize {
        let now = Instant::now();
        let last = self.inner.borrow_mut().last_frame.replace(now);
        let dt = last.map_or(Duration::ZERO, |last| now - last);
        self.tick(dt)
    }

    /// Whether any ticker still wants frames
    pub fn has_active_tickers(&self) -> bool {
        self.inner.borrow().tickers.values().any(|slot| slot.active)
    }

    /// Number of live ticker registrations, active or not
    pub fn ticker_count(&self) -> usize {
        self.inner.borrow().tickers.len()
    }

    /// Number of frames ticked so far
    pub fn frame(&self) -> u64 {
        self.inner.borrow().frame
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A registration in an [`AnimationScheduler`]
///
/// Exclusively owned by one animation. Dropping it cancels any in-flight
/// ticking and frees the slot. All methods are no-ops once the scheduler
/// itself is gone.
pub struct Ticker {
    id: TickerId,
    scheduler: Weak<RefCell<SchedulerInner>>,
}

impl Ticker {
    pub fn id(&self) -> TickerId {
        self.id
    }

    /// Reset elapsed time to zero and start receiving frames
    pub fn start(&mut self) {
        self.with_slot(|slot| {
            slot.active = true;
            slot.elapsed = Duration::ZERO;
        });
    }

    /// Stop receiving frames, keeping the elapsed time
    pub fn stop(&mut self) {
        self.with_slot(|slot| slot.active = false);
    }

    pub fn is_active(&self) -> bool {
        self.with_slot(|slot| slot.active).unwrap_or(false)
    }

    /// Frame time accumulated since the last `start`
    pub fn elapsed(&self) -> Duration {
        self.with_slot(|slot| slot.elapsed).unwrap_or_default()
    }

    fn with_slot<R>(&self, f: impl FnOnce(&mut TickerSlot) -> R) -> Option<R> {
        let inner = self.scheduler.upgrade()?;
        let mut inner = inner.borrow_mut();
        inner.tickers.get_mut(self.id).map(f)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        let Some(inner) = self.scheduler.upgrade() else {
            return;
        };
        let removed = inner.borrow_mut().tickers.remove(self.id);
        if let Some(slot) = removed {
            tracing::debug!(
                id = ?self.id,
                label = slot.label,
                was_active = slot.active,
                "ticker released"
            );
        }
    }
}

impl std::fmt::Debug for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ticker")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .field("elapsed", &self.elapsed())
            .finish()
    }
}
