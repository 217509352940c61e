// Shared tuning constants for the portfolio page behavior.

// Cursor follower
pub const CURSOR_GAIN: f32 = 0.2; // fraction of remaining distance covered per frame
pub const FOLLOWER_GAIN: f32 = 0.1; // slower trailing halo
pub const CURSOR_SIZE_PX: f32 = 12.0;
pub const FOLLOWER_SIZE_PX: f32 = 40.0;
pub const CURSOR_MIN_VIEWPORT_PX: u32 = 769; // below this the layout is treated as touch/narrow
pub const HOVER_CLASS: &str = "hover";
pub const HOVER_TARGETS: &[&str] = &[
    "a",
    "button",
    ".project-card",
    ".skill-card",
    ".testimonial-card",
];

// Navigation
pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 100.0;
pub const NAVBAR_SCROLLED_CLASS: &str = "scrolled";
pub const NAV_SCROLL_OFFSET_PX: f64 = 80.0; // fixed header height
pub const MENU_OPEN_CLASS: &str = "mobile-open";

// Skill bars
pub const SKILL_VISIBILITY_THRESHOLD: f64 = 0.5;

// Reveals
pub const REVEAL_EASING: &str = "cubic-bezier(0.33, 1, 0.68, 1)"; // ease-out cubic

// Contact form
pub const FORM_SENT_LABEL: &str = "Message Sent!";
pub const FORM_SENT_BACKGROUND: &str = "linear-gradient(135deg, #10b981, #059669)";
pub const FORM_RESET_DELAY_MS: i32 = 3000;

// Clock
pub const CLOCK_UTC_OFFSET_MINUTES: i32 = 6 * 60; // Asia/Dhaka, no DST
pub const CLOCK_REFRESH_MS: i32 = 1000;
pub const CLOCK_LABEL: &str = "My Local Time:";
pub const CLOCK_SLEEP_FROM_HOUR: u32 = 23;
pub const CLOCK_SLEEP_UNTIL_HOUR: u32 = 7;
