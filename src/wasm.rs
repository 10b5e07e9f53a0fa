//! WebAssembly bindings for the `libcoords` crate.

use crate::links::{BingMapsLink, GoogleMapsLink};
use wasm_bindgen::prelude::*;

fn to_js_error(e: crate::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Convert a string holding one coordinate pair and return `[latitude, longitude]` as decimal
/// strings.
#[wasm_bindgen]
pub fn retrieve_lat_long(text: &str) -> Result<JsValue, JsValue> {
    let (latitude, longitude) = crate::retrieve_lat_long(text)
        .map_err(to_js_error)?
        .to_strings();

    match JsValue::from_serde(&[latitude, longitude]) {
        Ok(v) => Ok(v),
        Err(_) => Err(JsValue::from_str("Unable to convert result to JSON!")),
    }
}

/// Find every degree/minute/second coordinate in the text. Each match carries its byte span in
/// the normalized text, the matched text and the converted coordinate.
#[wasm_bindgen]
pub fn find_coordinates(text: &str) -> Result<JsValue, JsValue> {
    let matches = crate::find_matches(text).map_err(to_js_error)?;

    match JsValue::from_serde(&matches) {
        Ok(v) => Ok(v),
        Err(_) => Err(JsValue::from_str("Unable to convert result to JSON!")),
    }
}

/// Replace every coordinate in the text with a link to `provider`, either `"google"` or
/// `"bing"`.
#[wasm_bindgen]
pub fn replace_with_links(text: &str, provider: &str) -> Result<String, JsValue> {
    let replaced = match provider {
        "google" => crate::replace(text, &GoogleMapsLink::default()),
        "bing" => crate::replace(text, &BingMapsLink::default()),
        other => {
            let msg = format!("Unknown map provider: {:?}", other);
            return Err(JsValue::from_str(&msg));
        }
    };

    replaced.map_err(to_js_error)
}
