//! Bounded hand-off queue between the tick context and a render task.
//!
//! Offloaded workers must not run inside the timer tick. When one is due,
//! the scheduler pushes its callback here; whichever task owns the receiving
//! side drains the queue with its own context and can block or run long
//! without stalling the tick. The fixed capacity bounds how much offloaded
//! work a single tick can start. Thread/interrupt safe via critical sections.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::scheduler::WorkFn;

/// Error returned when the queue has no room for another dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFullError;

/// A bounded queue of pending offloaded work.
///
/// Backed by a fixed-size `heapless::Deque` behind a critical section, so it
/// can be shared between an interrupt-driven scheduler and a task.
pub struct OffloadQueue<C, const DEPTH: usize> {
    inner: Mutex<RefCell<Deque<WorkFn<C>, DEPTH>>>,
}

impl<C, const DEPTH: usize> OffloadQueue<C, DEPTH> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get the sender handle the scheduler dispatches through.
    pub const fn sender(&self) -> OffloadSender<'_, C, DEPTH> {
        OffloadSender { queue: self }
    }

    /// Get the receiver handle for the draining task.
    pub const fn receiver(&self) -> OffloadReceiver<'_, C, DEPTH> {
        OffloadReceiver { queue: self }
    }

    fn push(&self, work: WorkFn<C>) -> Result<(), QueueFullError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(work).map_err(|_| QueueFullError)
        })
    }

    fn pop(&self) -> Option<WorkFn<C>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<C, const DEPTH: usize> Default for OffloadQueue<C, DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for an [`OffloadQueue`].
pub struct OffloadSender<'a, C, const DEPTH: usize> {
    queue: &'a OffloadQueue<C, DEPTH>,
}

impl<C, const DEPTH: usize> Clone for OffloadSender<'_, C, DEPTH> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, const DEPTH: usize> Copy for OffloadSender<'_, C, DEPTH> {}

impl<C, const DEPTH: usize> OffloadSender<'_, C, DEPTH> {
    /// Queue a due worker for execution outside the tick.
    ///
    /// Returns `Err(QueueFullError)` if the queue is full.
    pub fn dispatch(&self, work: WorkFn<C>) -> Result<(), QueueFullError> {
        self.queue.push(work)
    }
}

/// A receiver handle for an [`OffloadQueue`].
pub struct OffloadReceiver<'a, C, const DEPTH: usize> {
    queue: &'a OffloadQueue<C, DEPTH>,
}

impl<C, const DEPTH: usize> Clone for OffloadReceiver<'_, C, DEPTH> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, const DEPTH: usize> Copy for OffloadReceiver<'_, C, DEPTH> {}

impl<C, const DEPTH: usize> OffloadReceiver<'_, C, DEPTH> {
    /// Run every queued work item with the draining task's context.
    ///
    /// Failures are logged and do not stop the drain; each item is isolated.
    /// Returns the number of items executed.
    pub fn run_pending(&self, ctx: &mut C) -> usize {
        let mut ran = 0;
        while let Some(work) = self.queue.pop() {
            if work(ctx).is_err() {
                #[cfg(feature = "esp32-log")]
                println!("[offload] queued work failed");
            }
            ran += 1;
        }
        ran
    }
}
