use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};
use yew::Callback;

use super::store::{SessionFlagStore, SessionStorage};
use crate::config;
use crate::timer::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Hidden,
    Shown,
    Dismissing,
    Dismissed,
}

/// What the page has to do when the gate moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateIntent {
    /// Hide the main content and lock page scrolling behind the gate.
    Conceal,
    /// Start the gate's fade-out.
    FadeOut,
    /// Remove the gate, show the main content and restore scrolling.
    Reveal,
    /// Make the "click to enter" prompt visible.
    ShowHint,
}

/// One-shot landing screen shown before the main content, once per session.
pub struct LandingGate<S: Scheduler, T> {
    state: Rc<Cell<GateState>>,
    flags: SessionFlagStore<T>,
    scheduler: S,
    intents: Callback<GateIntent>,
    hint_timer: RefCell<Option<S::Handle>>,
    transition_timer: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler, T: SessionStorage> LandingGate<S, T> {
    pub fn new(scheduler: S, flags: SessionFlagStore<T>, intents: Callback<GateIntent>) -> Self {
        Self {
            state: Rc::new(Cell::new(GateState::Hidden)),
            flags,
            scheduler,
            intents,
            hint_timer: RefCell::new(None),
            transition_timer: RefCell::new(None),
        }
    }

    pub fn state(&self) -> GateState {
        self.state.get()
    }

    pub fn initialize(&self) -> GateState {
        if self.state.get() != GateState::Hidden {
            return self.state.get();
        }

        if self.flags.get(config::LANDING_SEEN_KEY) {
            info!("Landing gate already seen this session");
            self.state.set(GateState::Dismissed);
            self.intents.emit(GateIntent::Reveal);
            return GateState::Dismissed;
        }

        self.state.set(GateState::Shown);
        self.intents.emit(GateIntent::Conceal);

        // Runs regardless of any dismissal in between.
        let intents = self.intents.clone();
        let hint = self.scheduler.timeout(
            config::GATE_HINT_DELAY_MS,
            Box::new(move || intents.emit(GateIntent::ShowHint)),
        );
        *self.hint_timer.borrow_mut() = Some(hint);

        GateState::Shown
    }

    /// Returns false when the call was a no-op.
    pub fn dismiss(&self) -> bool {
        if self.state.get() != GateState::Shown {
            return false;
        }

        self.state.set(GateState::Dismissing);
        if let Err(e) = self.flags.set(config::LANDING_SEEN_KEY) {
            warn!("Could not remember landing dismissal: {}", e);
        }
        self.intents.emit(GateIntent::FadeOut);

        let state = self.state.clone();
        let intents = self.intents.clone();
        let finish = self.scheduler.timeout(
            config::GATE_TRANSITION_MS,
            Box::new(move || {
                state.set(GateState::Dismissed);
                intents.emit(GateIntent::Reveal);
            }),
        );
        *self.transition_timer.borrow_mut() = Some(finish);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::memory::MemoryStorage;
    use crate::timer::manual::ManualScheduler;

    fn gate(
        scheduler: &ManualScheduler,
        storage: &MemoryStorage,
    ) -> (LandingGate<ManualScheduler, MemoryStorage>, Rc<RefCell<Vec<GateIntent>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let intents = {
            let seen = seen.clone();
            Callback::from(move |intent: GateIntent| seen.borrow_mut().push(intent))
        };
        let flags = SessionFlagStore::new(Ok(storage.clone()));
        (LandingGate::new(scheduler.clone(), flags, intents), seen)
    }

    #[test]
    fn first_visit_shows_gate_and_conceals_content() {
        let scheduler = ManualScheduler::new();
        let (gate, seen) = gate(&scheduler, &MemoryStorage::default());
        assert_eq!(gate.state(), GateState::Hidden);
        assert_eq!(gate.initialize(), GateState::Shown);
        assert_eq!(*seen.borrow(), vec![GateIntent::Conceal]);
    }

    #[test]
    fn hint_appears_after_two_seconds() {
        let scheduler = ManualScheduler::new();
        let (gate, seen) = gate(&scheduler, &MemoryStorage::default());
        gate.initialize();
        scheduler.advance(1999);
        assert!(!seen.borrow().contains(&GateIntent::ShowHint));
        scheduler.advance(1);
        assert!(seen.borrow().contains(&GateIntent::ShowHint));
        assert_eq!(gate.state(), GateState::Shown);
    }

    #[test]
    fn dismiss_fades_then_reveals_after_transition() {
        let scheduler = ManualScheduler::new();
        let (gate, seen) = gate(&scheduler, &MemoryStorage::default());
        gate.initialize();
        assert!(gate.dismiss());
        assert_eq!(gate.state(), GateState::Dismissing);
        assert_eq!(seen.borrow().last(), Some(&GateIntent::FadeOut));

        scheduler.advance(999);
        assert_eq!(gate.state(), GateState::Dismissing);
        scheduler.advance(1);
        assert_eq!(gate.state(), GateState::Dismissed);
        assert_eq!(seen.borrow().last(), Some(&GateIntent::Reveal));
    }

    #[test]
    fn double_dismiss_is_a_no_op() {
        let scheduler = ManualScheduler::new();
        let storage = MemoryStorage::default();
        let (gate, seen) = gate(&scheduler, &storage);
        gate.initialize();
        assert!(gate.dismiss());
        assert!(!gate.dismiss());
        scheduler.advance(5000);
        assert!(!gate.dismiss());

        let reveals = seen.borrow().iter().filter(|i| **i == GateIntent::Reveal).count();
        assert_eq!(reveals, 1);
        assert_eq!(storage.writes.get(), 1);
    }

    #[test]
    fn dismiss_before_initialize_is_ignored() {
        let scheduler = ManualScheduler::new();
        let (gate, seen) = gate(&scheduler, &MemoryStorage::default());
        assert!(!gate.dismiss());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn same_session_skips_gate_after_dismissal() {
        let scheduler = ManualScheduler::new();
        let storage = MemoryStorage::default();
        let (first, _) = gate(&scheduler, &storage);
        first.initialize();
        first.dismiss();
        scheduler.advance(1000);

        let (second, seen) = gate(&scheduler, &storage);
        assert_eq!(second.initialize(), GateState::Dismissed);
        assert_eq!(*seen.borrow(), vec![GateIntent::Reveal]);
        scheduler.advance(5000);
        assert!(!seen.borrow().contains(&GateIntent::ShowHint));
    }

    #[test]
    fn hint_and_transition_stay_independent() {
        let scheduler = ManualScheduler::new();
        let (gate, seen) = gate(&scheduler, &MemoryStorage::default());
        gate.initialize();
        scheduler.advance(1500);
        gate.dismiss();
        scheduler.advance(1000);

        // hint at 2000, reveal at 2500
        assert_eq!(
            *seen.borrow(),
            vec![
                GateIntent::Conceal,
                GateIntent::FadeOut,
                GateIntent::ShowHint,
                GateIntent::Reveal,
            ]
        );
    }

    #[test]
    fn unavailable_storage_still_shows_and_dismisses() {
        let scheduler = ManualScheduler::new();
        let (gate, _) = gate(&scheduler, &MemoryStorage::broken());
        assert_eq!(gate.initialize(), GateState::Shown);
        assert!(gate.dismiss());
        scheduler.advance(1000);
        assert_eq!(gate.state(), GateState::Dismissed);
    }

    #[test]
    fn initialize_twice_has_no_extra_effects() {
        let scheduler = ManualScheduler::new();
        let (gate, seen) = gate(&scheduler, &MemoryStorage::default());
        gate.initialize();
        assert_eq!(gate.initialize(), GateState::Shown);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(scheduler.pending(), 1);
    }
}
