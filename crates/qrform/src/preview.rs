// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rendering of the preview region and the download button.

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlButtonElement, HtmlElement, HtmlImageElement};

pub const LOADING: &str = "Gerando QR Code...";
pub const SERVER_ERROR: &str = "Erro ao gerar QR Code.";
pub const CONNECTION_ERROR: &str = "Erro de conexão. Tente novamente mais tarde.";

/// The preview container and its optional download button.
///
/// Every state transition replaces the region's content unconditionally,
/// whatever was displayed before.
pub struct Preview {
    region: HtmlElement,
    download: Option<HtmlButtonElement>,
    download_name: String,
    // The onclick closure of the download button. Kept alive here until
    // the next successful generation replaces it.
    armed: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Preview {
    pub fn new(
        region: HtmlElement,
        download: Option<HtmlButtonElement>,
        download_name: String,
    ) -> Self {
        Preview {
            region,
            download,
            download_name,
            armed: RefCell::new(None),
        }
    }

    pub fn loading(&self) {
        self.message(LOADING);

        if let Some(button) = &self.download {
            button.set_hidden(true);
        }
    }

    pub fn server_error(&self) {
        self.message(SERVER_ERROR);
    }

    pub fn connection_error(&self) {
        self.message(CONNECTION_ERROR);
    }

    /// Swap the generated image into the region and arm the download
    /// button for it.
    pub fn success(&self, url: &str) {
        let Some(document) = self.region.owner_document() else {
            return;
        };

        self.region.set_inner_html("");

        if let Ok(img) = document.create_element("img") {
            let img: HtmlImageElement = img.unchecked_into();
            img.set_src(url);
            img.set_alt("QR Code");
            drop(self.region.append_child(&img));
        }

        self.arm_download(url);
    }

    fn message(&self, text: &str) {
        let Some(document) = self.region.owner_document() else {
            return;
        };

        self.region.set_inner_html("");

        if let Ok(p) = document.create_element("p") {
            p.set_text_content(Some(text));
            drop(self.region.append_child(&p));
        }
    }

    fn arm_download(&self, url: &str) {
        let Some(button) = &self.download else {
            return;
        };

        let url = url.to_owned();
        let filename = self.download_name.clone();
        let hook = Closure::<dyn FnMut()>::new(move || download(&url, &filename));

        button.set_onclick(Some(hook.as_ref().unchecked_ref()));
        button.set_hidden(false);

        *self.armed.borrow_mut() = Some(hook);
    }
}

/// Trigger a browser download of `url` through a transient anchor element.
fn download(url: &str, filename: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Ok(anchor) = document.create_element("a") else {
        return;
    };

    let anchor: HtmlAnchorElement = anchor.unchecked_into();
    anchor.set_href(url);
    anchor.set_download(filename);
    anchor.click();
}
