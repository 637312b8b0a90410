//! Portfolio chat widget: client-side state and transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget's view layer binds to [`state::chat::ChatState`] and drives
//! sends through [`net::api::HttpTransport`]. Everything here is plain Rust so
//! the state machine is testable off the browser; browser-only code sits
//! behind the `hydrate` feature.

pub mod net;
pub mod state;
pub mod util;

/// Install the panic hook and route `log` output to the browser console.
#[cfg(feature = "hydrate")]
pub fn init_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
