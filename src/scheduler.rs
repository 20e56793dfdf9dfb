//! Cooperative multiplexing of periodic work onto one hardware timer tick.
//!
//! A single fixed-rate timer drives everything: the platform calls
//! [`Scheduler::tick`] once per [`BASE_TICK`], and each registered worker
//! fires whenever the elapsed tick time is an exact multiple of its period.
//! Workers run synchronously inside the tick, in registration order, so they
//! must be short; long-running work goes through the offload queue instead.
//!
//! Caller contract: a worker period must be an integer multiple of
//! `BASE_TICK * rate`. Periods that are not exact multiples fire at the
//! wrong frequency or never. The scheduler does not validate this.

use embassy_time::Duration;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::offload::OffloadSender;

/// Interval between hardware timer ticks.
pub const BASE_TICK: Duration = Duration::from_millis(20);

/// Error returned by a failing worker callback.
///
/// The scheduler logs the failure and disables the worker; the remaining
/// workers on the same tick still fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkError;

/// Worker callback type.
///
/// Workers are plain fn pointers so the scheduler can key them by identity:
/// re-registering the same fn replaces its worker instead of adding one.
pub type WorkFn<C> = fn(&mut C) -> Result<(), WorkError>;

#[derive(Debug)]
struct Worker<C> {
    work: WorkFn<C>,
    period_ms: u64,
    offload: bool,
    enabled: bool,
}

impl<C> Clone for Worker<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Worker<C> {}

/// Periodic task scheduler driven by one external tick source.
///
/// `C` is the context handed to every worker. `MAX_WORKERS` bounds the
/// worker table, `OFFLOAD_DEPTH` must match the attached offload queue.
pub struct Scheduler<'a, C, const MAX_WORKERS: usize, const OFFLOAD_DEPTH: usize> {
    workers: Vec<Worker<C>, MAX_WORKERS>,
    counter: u64,
    rate: u64,
    stopped: bool,
    offload: Option<OffloadSender<'a, C, OFFLOAD_DEPTH>>,
}

impl<'a, C, const MAX_WORKERS: usize, const OFFLOAD_DEPTH: usize>
    Scheduler<'a, C, MAX_WORKERS, OFFLOAD_DEPTH>
{
    /// Create a new scheduler with no workers and no offload queue.
    pub const fn new() -> Self {
        Self {
            workers: Vec::new(),
            counter: 0,
            rate: 1,
            stopped: false,
            offload: None,
        }
    }

    /// Attach an offload queue for workers registered with
    /// [`add_offloaded_work`](Self::add_offloaded_work).
    pub fn with_offload(mut self, sender: OffloadSender<'a, C, OFFLOAD_DEPTH>) -> Self {
        self.offload = Some(sender);
        self
    }

    /// Set the platform timer correction factor.
    ///
    /// Some hardware variants run the tick timer off-frequency; `rate`
    /// scales the elapsed-time computation to compensate. Normally 1.
    pub fn with_rate(mut self, rate: u64) -> Self {
        self.rate = if rate == 0 { 1 } else { rate };
        self
    }

    /// Register a synchronous worker firing every `period`.
    ///
    /// Re-registering the same fn replaces the existing worker in place.
    /// A zero period is logged and dropped, never fatal.
    pub fn add_work(&mut self, work: WorkFn<C>, period: Duration) {
        self.register(work, period, false);
    }

    /// Register a worker whose callback is pushed onto the offload queue
    /// when due, instead of running inside the tick.
    pub fn add_offloaded_work(&mut self, work: WorkFn<C>, period: Duration) {
        self.register(work, period, true);
    }

    fn register(&mut self, work: WorkFn<C>, period: Duration, offload: bool) {
        let period_ms = period.as_millis();
        if period_ms == 0 {
            #[cfg(feature = "esp32-log")]
            println!("[scheduler] work period must be positive, not registered");
            return;
        }

        let worker = Worker {
            work,
            period_ms,
            offload,
            enabled: true,
        };

        if let Some(existing) = self.position(work) {
            self.workers[existing] = worker;
            return;
        }

        if self.workers.push(worker).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[scheduler] worker table full, not registered");
        }
    }

    /// Remove a worker by callback identity. No-op if absent.
    pub fn del_work(&mut self, work: WorkFn<C>) {
        if let Some(index) = self.position(work) {
            self.workers.remove(index);
        }
    }

    /// Remove the most recently inserted worker.
    pub fn del_last_work(&mut self) {
        self.workers.pop();
    }

    /// Remove all workers.
    pub fn del_works(&mut self) {
        self.workers.clear();
    }

    /// Stop dispatching and clear all workers.
    ///
    /// Subsequent ticks are no-ops; the caller should also stop its timer.
    pub fn deinit(&mut self) {
        self.stopped = true;
        self.workers.clear();
    }

    /// Number of registered workers.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Ticks elapsed since creation. The counter is 64-bit and never wraps.
    pub const fn tick_count(&self) -> u64 {
        self.counter
    }

    /// Advance one tick and fire every due worker.
    ///
    /// Call this from the platform timer at [`BASE_TICK`] intervals. The
    /// worker table is snapshotted at the start of the tick, so mid-tick
    /// registration or removal takes effect on the next tick.
    pub fn tick(&mut self, ctx: &mut C) {
        if self.stopped {
            return;
        }

        self.counter += 1;
        let elapsed_ms = self.counter * BASE_TICK.as_millis() * self.rate;

        let snapshot: Vec<Worker<C>, MAX_WORKERS> = self.workers.clone();
        for worker in &snapshot {
            if !worker.enabled || !elapsed_ms.is_multiple_of(worker.period_ms) {
                continue;
            }

            if worker.offload {
                self.dispatch_offloaded(worker.work);
            } else if (worker.work)(ctx).is_err() {
                #[cfg(feature = "esp32-log")]
                println!("[scheduler] worker failed, disabling");
                self.disable(worker.work);
            }
        }
    }

    fn dispatch_offloaded(&mut self, work: WorkFn<C>) {
        let Some(sender) = self.offload else {
            #[cfg(feature = "esp32-log")]
            println!("[scheduler] no offload queue attached, dispatch skipped");
            return;
        };

        if sender.dispatch(work).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[scheduler] offload queue full, dispatch skipped");
        }
    }

    fn disable(&mut self, work: WorkFn<C>) {
        if let Some(index) = self.position(work) {
            self.workers[index].enabled = false;
        }
    }

    fn position(&self, work: WorkFn<C>) -> Option<usize> {
        self.workers
            .iter()
            .position(|worker| core::ptr::fn_addr_eq(worker.work, work))
    }
}

impl<C, const MAX_WORKERS: usize, const OFFLOAD_DEPTH: usize> Default
    for Scheduler<'_, C, MAX_WORKERS, OFFLOAD_DEPTH>
{
    fn default() -> Self {
        Self::new()
    }
}
