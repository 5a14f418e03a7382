// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// A required element is missing from the page, or has the wrong type.
    Dom(String),
    /// The endpoint answered with a non-2xx status.
    Server(u16),
    /// The request never completed, or its body could not be decoded.
    Network(String),
}

impl Error {
    pub(crate) fn dom(value: JsValue) -> Self {
        Error::Dom(js_message(value))
    }

    pub(crate) fn network(value: JsValue) -> Self {
        Error::Network(js_message(value))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Dom(message) => write!(f, "{message}"),
            Error::Server(status) => write!(f, "server responded with status {status}"),
            Error::Network(message) => write!(f, "request failed: {message}"),
        }
    }
}

impl std::error::Error for Error {}

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status() {
        assert_eq!(
            Error::Server(500).to_string(),
            "server responded with status 500"
        );
    }

    #[test]
    fn display_wraps_network_message() {
        assert_eq!(
            Error::Network("connection reset".into()).to_string(),
            "request failed: connection reset"
        );
    }
}
