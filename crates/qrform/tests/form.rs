// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{HtmlButtonElement, HtmlElement};

use qrform::debounce::Debounce;
use qrform::preview::{Preview, CONNECTION_ERROR, LOADING, SERVER_ERROR};

wasm_bindgen_test_configure!(run_in_browser);

fn region() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();

    document.create_element("div").unwrap().unchecked_into()
}

#[wasm_bindgen_test]
async fn burst_of_edits_fires_once() {
    let fired = Rc::new(Cell::new(0));
    let debounce = Debounce::new(20);

    for _ in 0..5 {
        let fired = Rc::clone(&fired);
        debounce.schedule(move || fired.set(fired.get() + 1));
    }

    TimeoutFuture::new(100).await;

    assert_eq!(fired.get(), 1);
}

#[wasm_bindgen_test]
async fn reschedule_resets_the_quiet_period() {
    let fired = Rc::new(Cell::new(0));
    let debounce = Debounce::new(50);

    {
        let fired = Rc::clone(&fired);
        debounce.schedule(move || fired.set(fired.get() + 1));
    }
    TimeoutFuture::new(30).await;
    assert_eq!(fired.get(), 0);

    {
        let fired = Rc::clone(&fired);
        debounce.schedule(move || fired.set(fired.get() + 1));
    }
    TimeoutFuture::new(30).await;
    // The second schedule replaced the first before it could fire.
    assert_eq!(fired.get(), 0);

    TimeoutFuture::new(40).await;
    assert_eq!(fired.get(), 1);
}

#[wasm_bindgen_test]
fn success_renders_the_image() {
    let region = region();
    let preview = Preview::new(region.clone(), None, String::from("QRCode.png"));

    preview.success("/files/abc.png");

    let img = region.query_selector("img").unwrap().unwrap();

    assert_eq!(img.get_attribute("src").as_deref(), Some("/files/abc.png"));
}

#[wasm_bindgen_test]
fn success_reveals_the_download_button() {
    let document = web_sys::window().unwrap().document().unwrap();
    let button: HtmlButtonElement = document.create_element("button").unwrap().unchecked_into();
    button.set_hidden(true);

    let preview = Preview::new(region(), Some(button.clone()), String::from("QRCode.png"));

    preview.success("/files/abc.png");
    assert!(!button.hidden());

    // The next trigger hides the button again until a fresh success.
    preview.loading();
    assert!(button.hidden());
}

#[wasm_bindgen_test]
fn states_use_the_fixed_messages() {
    let region = region();
    let preview = Preview::new(region.clone(), None, String::from("QRCode.png"));

    preview.loading();
    assert_eq!(region.text_content().as_deref(), Some(LOADING));

    preview.server_error();
    assert_eq!(region.text_content().as_deref(), Some(SERVER_ERROR));

    preview.connection_error();
    assert_eq!(region.text_content().as_deref(), Some(CONNECTION_ERROR));
}
