// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Where the controller finds its elements and where it sends the form.
///
/// Each controller instance owns its own configuration, so several
/// independent forms can coexist on one page.
pub struct FormConfig {
    pub form_id: String,
    pub preview_id: String,
    pub logo_id: String,
    pub download_id: String,
    pub endpoint: String,
    /// Quiet period in milliseconds before an edit turns into a request.
    pub debounce_ms: u32,
    pub download_name: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            form_id: String::from("qrForm"),
            preview_id: String::from("qrCodeImage"),
            logo_id: String::from("logo"),
            download_id: String::from("downloadButton"),
            endpoint: String::from("/generate"),
            debounce_ms: 500,
            download_name: String::from("QRCode.png"),
        }
    }
}
