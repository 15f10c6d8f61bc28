use log::info;
use yew::Callback;

use super::carousel::{CarouselEngine, SlideView};
use super::gate::{GateIntent, LandingGate};
use super::store::{SessionFlagStore, SessionStorage};
use crate::config;
use crate::error::StorageError;
use crate::timer::Scheduler;

/// Startup composition of the landing gate and the hero carousel.
pub struct PresentationSession<S: Scheduler, T> {
    gate: LandingGate<S, T>,
    carousel: CarouselEngine<S>,
}

impl<S: Scheduler + Clone, T: SessionStorage> PresentationSession<S, T> {
    pub fn start(
        scheduler: S,
        storage: Result<T, StorageError>,
        slide_count: usize,
        gate_intents: Callback<GateIntent>,
        slide_render: Callback<SlideView>,
    ) -> Self {
        let gate = LandingGate::new(scheduler.clone(), SessionFlagStore::new(storage), gate_intents);
        let carousel = CarouselEngine::new(
            slide_count,
            scheduler,
            config::AUTOPLAY_INTERVAL_MS,
            slide_render,
        );

        let gate_state = gate.initialize();
        carousel.start();
        info!("Presentation session started: gate {:?}, {} slides", gate_state, slide_count);

        Self { gate, carousel }
    }

    pub fn gate(&self) -> &LandingGate<S, T> {
        &self.gate
    }

    pub fn carousel(&self) -> &CarouselEngine<S> {
        &self.carousel
    }

    /// Routes a window-level key press. Returns true if something handled it.
    pub fn handle_key(&self, key: &str) -> bool {
        self.carousel.handle_key(key)
    }
}
