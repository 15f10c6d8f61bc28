use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Session storage key marking the landing gate as seen.
pub const LANDING_SEEN_KEY: &str = "hasSeenLanding";

// Timings in milliseconds
pub const GATE_TRANSITION_MS: u32 = 1000;
pub const GATE_HINT_DELAY_MS: u32 = 2000;
pub const AUTOPLAY_INTERVAL_MS: u32 = 5000;
pub const TOAST_VISIBLE_MS: u32 = 3000;
pub const TOAST_EXIT_MS: u32 = 300;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

pub const SCROLL_TO_TOP_THRESHOLD_PX: f64 = 300.0;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const DEFAULT_IMAGE_CAPTION: &str = "图片";

#[derive(PartialEq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "index.html", label: "首页" },
    NavLink { href: "about.html", label: "关于我们" },
    NavLink { href: "works.html", label: "作品展示" },
    NavLink { href: "contact.html", label: "联系我们" },
];

#[derive(PartialEq)]
pub struct Picture {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const SLIDES: &[Picture] = &[
    Picture { src: "/assets/slides/studio.jpg", alt: "蜂鸟创新工作室" },
    Picture { src: "/assets/slides/workshop.jpg", alt: "创新工作坊" },
    Picture { src: "/assets/slides/competition.jpg", alt: "竞赛现场" },
];

pub const AWARD_CERTIFICATES: &[Picture] = &[
    Picture { src: "/assets/awards/innovation.jpg", alt: "创新大赛获奖证书" },
    Picture { src: "/assets/awards/design.jpg", alt: "设计竞赛获奖证书" },
];

/// Something a visitor can copy from the contact section.
#[derive(PartialEq)]
pub struct ContactTarget {
    pub label: &'static str,
    pub value: &'static str,
    pub copied_message: &'static str,
}

pub const CONTACTS: &[ContactTarget] = &[
    ContactTarget {
        label: "邮箱",
        value: "3540750653@qq.com",
        copied_message: "邮箱地址已复制到剪贴板！",
    },
    ContactTarget {
        label: "QQ",
        value: "3540750653",
        copied_message: "QQ号已复制到剪贴板！",
    },
    ContactTarget {
        label: "QQ群",
        value: "859475376",
        copied_message: "QQ群号已复制到剪贴板！",
    },
];
