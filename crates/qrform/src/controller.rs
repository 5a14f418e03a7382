// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The form controller: event wiring, debounce and the generation flow.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::config::FormConfig;
use crate::debounce::Debounce;
use crate::error::{Error, Result};
use crate::net;
use crate::preview::Preview;

pub const PNG_ONLY: &str = "Por favor, envie apenas arquivos PNG.";

pub struct FormController {
    form: HtmlFormElement,
    logo: HtmlInputElement,
    preview: Preview,
    endpoint: String,
    debounce: Debounce,
}

impl FormController {
    /// Look up the form elements and install the event listeners.
    ///
    /// The controller and its listeners stay alive for the lifetime of
    /// the page.
    pub fn mount(config: FormConfig) -> Result<()> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| Error::Dom(String::from("no document")))?;

        let form: HtmlFormElement = lookup(&document, &config.form_id)?;
        let region: HtmlElement = lookup(&document, &config.preview_id)?;
        let logo: HtmlInputElement = lookup(&document, &config.logo_id)?;

        // The download button is optional in the page markup.
        let download = document
            .get_element_by_id(&config.download_id)
            .and_then(|element| element.dyn_into().ok());

        let controller = Rc::new(FormController {
            form,
            logo,
            preview: Preview::new(region, download, config.download_name),
            endpoint: config.endpoint,
            debounce: Debounce::new(config.debounce_ms),
        });

        let this = Rc::clone(&controller);
        let on_input = Closure::<dyn FnMut(Event)>::new(move |_: Event| Rc::clone(&this).edited());
        controller
            .form
            .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
            .map_err(Error::dom)?;
        on_input.forget();

        let this = Rc::clone(&controller);
        let on_logo =
            Closure::<dyn FnMut(Event)>::new(move |_: Event| Rc::clone(&this).logo_changed());
        controller
            .logo
            .add_event_listener_with_callback("change", on_logo.as_ref().unchecked_ref())
            .map_err(Error::dom)?;
        on_logo.forget();

        log::info!("form controller mounted on #{}", config.form_id);

        Ok(())
    }

    /// Every edit resets the quiet period; only the last edit in a burst
    /// reaches the server.
    fn edited(self: Rc<Self>) {
        let this = Rc::clone(&self);

        self.debounce.schedule(move || this.generate());
    }

    /// File selection validates synchronously and fires straight away,
    /// skipping the debounce timer.
    fn logo_changed(self: Rc<Self>) {
        if let Some(file) = self.logo.files().and_then(|files| files.item(0)) {
            if !is_png(&file.type_()) {
                if let Some(window) = web_sys::window() {
                    drop(window.alert_with_message(PNG_ONLY));
                }
                self.logo.set_value("");

                return;
            }
        }

        self.generate();
    }

    fn generate(self: Rc<Self>) {
        self.preview.loading();

        spawn_local(async move {
            // A previous request may still be in flight; whichever response
            // resolves last owns the preview.
            match net::submit(&self.endpoint, &self.form).await {
                Ok(url) => self.preview.success(&url),
                Err(Error::Server(status)) => {
                    log::warn!("generation rejected with status {status}");
                    self.preview.server_error();
                }
                Err(err) => {
                    log::warn!("generation request failed: {err}");
                    self.preview.connection_error();
                }
            }
        });
    }
}

fn lookup<T>(document: &Document, id: &str) -> Result<T>
where
    T: JsCast,
{
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::Dom(format!("missing element #{id}")))?
        .dyn_into()
        .map_err(|_| Error::Dom(format!("element #{id} has unexpected type")))
}

fn is_png(mime: &str) -> bool {
    mime.starts_with("image/png")
}
