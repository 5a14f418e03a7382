// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Multipart submission to the generation endpoint.

use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, HtmlFormElement, Request, RequestInit, Response};

use crate::error::{Error, Result};

#[derive(Deserialize)]
struct GenerateResponse {
    qr_image_url: String,
}

/// POST the form's current fields as multipart data and return the URL of
/// the generated image.
///
/// A non-2xx status maps to [`Error::Server`] without looking at the body;
/// everything else that can go wrong is an [`Error::Network`].
pub async fn submit(endpoint: &str, form: &HtmlFormElement) -> Result<String> {
    let body = FormData::new_with_form(form).map_err(Error::network)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(body.as_ref());

    let request = Request::new_with_str_and_init(endpoint, &init).map_err(Error::network)?;
    let window = web_sys::window().ok_or_else(|| Error::Network(String::from("no window")))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(Error::network)?;
    let response: Response = response.dyn_into().map_err(Error::network)?;

    if !response.ok() {
        return Err(Error::Server(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(Error::network)?)
        .await
        .map_err(Error::network)?;
    let text = text
        .as_string()
        .ok_or_else(|| Error::Network(String::from("response body is not text")))?;

    decode(&text)
}

fn decode(body: &str) -> Result<String> {
    let decoded: GenerateResponse =
        serde_json::from_str(body).map_err(|err| Error::Network(err.to_string()))?;

    Ok(decoded.qr_image_url)
}
