// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # qrform
//!
//! Browser frontend for a QR code generation service.
//!
//! The crate watches the generator form, collapses bursts of edits into a
//! single request after a 500 ms quiet period, POSTs the form as multipart
//! data to the `/generate` endpoint and swaps the returned image into the
//! preview region. Selecting a logo file validates its MIME type and
//! regenerates immediately.
//!
//! Build for `wasm32-unknown-unknown` and serve with
//! [`trunk`](https://trunkrs.dev/):
//!
//! ```sh
//! trunk serve
//! ```

use wasm_bindgen::prelude::wasm_bindgen;

pub use crate::config::FormConfig;
pub use crate::controller::FormController;
pub use crate::error::{Error, Result};

pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod net;
pub mod preview;

#[cfg(all(
    target_arch = "wasm32",
    feature = "rlsf",
    not(target_feature = "atomics")
))]
#[global_allocator]
static A: rlsf::SmallGlobalTlsf = rlsf::SmallGlobalTlsf::new();

#[wasm_bindgen(start)]
fn main() {
    init_panic_hook();

    console_log::init_with_level(log::Level::Info).ok();

    if let Err(err) = FormController::mount(FormConfig::default()) {
        log::error!("failed to mount the form controller: {err}");
    }
}

fn init_panic_hook() {
    // Only enable console hook on debug builds
    #[cfg(debug_assertions)]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}
