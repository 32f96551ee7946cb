//! WASM entry point
//!
//! Trunk compiles this to WASM and loads it on every server-rendered page.

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    hisab_ui::start();
}
