use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use yew::Callback;

use crate::config;
use crate::timer::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn background(&self) -> &'static str {
        match self {
            ToastKind::Info => "#17a2b8",
            ToastKind::Success => "#28a745",
            ToastKind::Warning => "#ffc107",
            ToastKind::Error => "#dc3545",
        }
    }
}

/// A message waiting to be shown, before it gets an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: ToastKind,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

pub type ToastId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    /// Playing the slide-out animation, about to be removed.
    pub leaving: bool,
}

struct Shelf {
    toasts: RefCell<Vec<Toast>>,
    next_id: Cell<ToastId>,
    on_change: Callback<Vec<Toast>>,
}

impl Shelf {
    fn publish(&self) {
        let snapshot = self.toasts.borrow().clone();
        self.on_change.emit(snapshot);
    }

    fn mark_leaving(&self, id: ToastId) {
        let changed = {
            let mut toasts = self.toasts.borrow_mut();
            match toasts.iter_mut().find(|t| t.id == id) {
                Some(toast) if !toast.leaving => {
                    toast.leaving = true;
                    true
                }
                _ => false,
            }
        };
        if changed {
            self.publish();
        }
    }

    fn remove(&self, id: ToastId) {
        let changed = {
            let mut toasts = self.toasts.borrow_mut();
            let before = toasts.len();
            toasts.retain(|t| t.id != id);
            toasts.len() != before
        };
        if changed {
            self.publish();
        }
    }
}

/// Stack of transient messages. Each toast removes itself after
/// `TOAST_VISIBLE_MS` plus the `TOAST_EXIT_MS` slide-out.
pub struct Toasts<S: Scheduler> {
    shelf: Rc<Shelf>,
    scheduler: S,
}

impl<S: Scheduler> Toasts<S> {
    pub fn new(scheduler: S, on_change: Callback<Vec<Toast>>) -> Self {
        Self {
            shelf: Rc::new(Shelf {
                toasts: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
                on_change,
            }),
            scheduler,
        }
    }

    pub fn show(&self, notice: Notice) -> ToastId {
        let id = self.shelf.next_id.get();
        self.shelf.next_id.set(id.wrapping_add(1));
        self.shelf.toasts.borrow_mut().push(Toast {
            id,
            message: notice.message,
            kind: notice.kind,
            leaving: false,
        });
        self.shelf.publish();

        let leave = Rc::downgrade(&self.shelf);
        self.scheduler.defer(
            config::TOAST_VISIBLE_MS,
            Box::new(move || with_shelf(&leave, |shelf| shelf.mark_leaving(id))),
        );
        let remove = Rc::downgrade(&self.shelf);
        self.scheduler.defer(
            config::TOAST_VISIBLE_MS + config::TOAST_EXIT_MS,
            Box::new(move || with_shelf(&remove, |shelf| shelf.remove(id))),
        );
        id
    }

    /// Removes a toast early. Unknown ids are ignored.
    pub fn dismiss(&self, id: ToastId) {
        self.shelf.remove(id);
    }

    #[cfg(test)]
    pub(crate) fn current(&self) -> Vec<Toast> {
        self.shelf.toasts.borrow().clone()
    }
}

fn with_shelf(shelf: &Weak<Shelf>, action: impl FnOnce(&Shelf)) {
    if let Some(shelf) = shelf.upgrade() {
        action(&shelf);
    }
}
