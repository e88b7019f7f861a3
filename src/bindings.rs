//! JavaScript entry points.

use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

use crate::{SearchOptions, solve_all, solve_once};

fn matrix_from_js(input: JsValue) -> Result<Vec<Vec<bool>>, JsError> {
    serde_wasm_bindgen::from_value(input).map_err(|err| JsError::new(&err.to_string()))
}

fn options_from_js(options: JsValue) -> Result<SearchOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(SearchOptions::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|err| JsError::new(&err.to_string()))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|err| JsError::new(&err.to_string()))
}

/// Every exact cover of a `boolean[][]`, as arrays of row indices.
///
/// `options` may be omitted, or be `{ rule: "leftmost" | "smallest", limit }`.
#[wasm_bindgen]
pub fn js_exact_cover(input: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let matrix = matrix_from_js(input)?;
    let options = options_from_js(options)?;
    let solutions = solve_all(&matrix, options)?;
    to_js(&solutions)
}

/// The first exact cover of a `boolean[][]`, or `null` if there is none.
#[wasm_bindgen]
pub fn js_first_cover(input: JsValue) -> Result<JsValue, JsError> {
    let matrix = matrix_from_js(input)?;
    to_js(&solve_once(&matrix)?)
}

/// The number of exact covers of a `boolean[][]`.
#[wasm_bindgen]
pub fn js_count_covers(input: JsValue) -> Result<usize, JsError> {
    let matrix = matrix_from_js(input)?;
    Ok(crate::exact_cover(&matrix)?.count())
}
