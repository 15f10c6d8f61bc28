use std::cell::RefCell;

/// Source of one-shot and repeating timers.
///
/// Dropping a returned handle cancels the timer. Callbacks always run on the
/// single UI thread, one at a time.
pub trait Scheduler {
    type Handle;

    fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> Self::Handle;

    /// Fire-and-forget one-shot timer that cannot be cancelled.
    fn defer(&self, millis: u32, callback: Box<dyn FnOnce()>);
}

/// Collapses bursts of calls into one, run `wait` ms after the last call.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    wait: u32,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, wait: u32) -> Self {
        Self {
            scheduler,
            wait,
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self, action: Box<dyn FnOnce()>) {
        // Drop the previous handle first so its timer never fires.
        self.pending.borrow_mut().take();
        let handle = self.scheduler.timeout(self.wait, action);
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}


#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn dropped_timeout_never_fires() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let handle = {
            let fired = fired.clone();
            scheduler.timeout(100, Box::new(move || fired.set(true)))
        };
        drop(handle);
        scheduler.advance(500);
        assert!(!fired.get());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn interval_repeats_until_dropped() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        let handle = {
            let count = count.clone();
            scheduler.interval(100, Box::new(move || count.set(count.get() + 1)))
        };
        scheduler.advance(350);
        assert_eq!(count.get(), 3);
        drop(handle);
        scheduler.advance(1000);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn debouncer_runs_once_after_last_call() {
        let scheduler = ManualScheduler::new();
        let debouncer = Debouncer::new(scheduler.clone(), 250);
        let count = Rc::new(Cell::new(0));
        for _ in 0..5 {
            let count = count.clone();
            debouncer.call(Box::new(move || count.set(count.get() + 1)));
            scheduler.advance(100);
        }
        assert_eq!(count.get(), 0);
        scheduler.advance(149);
        assert_eq!(count.get(), 0);
        scheduler.advance(1);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn debouncer_cancel_discards_pending_call() {
        let scheduler = ManualScheduler::new();
        let debouncer = Debouncer::new(scheduler.clone(), 250);
        let fired = Rc::new(Cell::new(false));
        {
            let fired = fired.clone();
            debouncer.call(Box::new(move || fired.set(true)));
        }
        debouncer.cancel();
        scheduler.advance(1000);
        assert!(!fired.get());
    }
}
