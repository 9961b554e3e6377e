use log::Level;

/// Formspree form that receives the early-access leads.
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/mqebrnke";

pub const PIXEL_ID: &str = "1414284940077637";

/// How long the success/error message stays before the form returns to idle.
pub const STATUS_RESET_MS: u32 = 5_000;

/// Vertical offset past which the navbar switches to its compact style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
