use gloo_timers::callback::{Interval, Timeout};

use crate::timer::Scheduler;

/// Timers backed by `setTimeout` / `setInterval`.
#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

/// Keeps a browser timer alive; dropping it clears the timer.
pub struct BrowserTimer {
    _timeout: Option<Timeout>,
    _interval: Option<Interval>,
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer {
            _timeout: Some(Timeout::new(millis, callback)),
            _interval: None,
        }
    }

    fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer {
            _timeout: None,
            _interval: Some(Interval::new(millis, callback)),
        }
    }

    fn defer(&self, millis: u32, callback: Box<dyn FnOnce()>) {
        Timeout::new(millis, callback).forget();
    }
}
