//! Browser smoke tests, compiled only for wasm32.
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use termfolio::shell::Session;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn session_boots_in_wasm() {
    let mut session = Session::new();
    session.submit("help");
    assert!(session.lines().count() > 3);
}

#[wasm_bindgen_test]
fn clock_ticks_in_wasm() {
    assert!(termfolio::clock::uptime_secs() > 0);
}
