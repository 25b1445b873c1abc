//! Boot sequence
//!
//! Build the page, hand the session to the web layer, start the clock.

use crate::web;

pub fn boot() {
    crate::console_log!("[boot] termfolio {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = web::init() {
        web_sys::console::error_1(&e);
    }
}
