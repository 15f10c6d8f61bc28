pub mod config;
pub mod error;
pub mod timer;
pub mod clipboard;
pub mod lightbox;
pub mod nav;
pub mod scroll;
pub mod toast;
pub mod context;

pub mod session {
    pub mod store;
    pub mod gate;
    pub mod carousel;
    pub mod controller;
}

pub mod web {
    pub mod dom;
    pub mod storage;
    pub mod timers;
    pub mod clipboard;
}

pub mod components {
    pub mod anchor;
    pub mod carousel;
    pub mod contact;
    pub mod landing;
    pub mod lightbox;
    pub mod scroll_to_top;
    pub mod toaster;
}

pub mod pages {
    pub mod home;
    pub mod about;
    pub mod works;
    pub mod contact;
}
