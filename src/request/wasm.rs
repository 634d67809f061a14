//! JavaScript bindings for browser and edge runtimes.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::AutoClusterRequest;
use crate::clock::DateClock;
use crate::error::ClusterError;

/// Clusters the tickets of a request object.
///
/// Resolves to the result object; rejects with the validation message.
#[wasm_bindgen(js_name = autoCluster)]
pub fn auto_cluster_js(request: JsValue) -> Result<JsValue, JsValue> {
    let request: AutoClusterRequest = serde_wasm_bindgen::from_value(request)
        .map_err(|err| to_js_error(ClusterError::Json(err.to_string())))?;
    let result = request.run_with_clock(DateClock).map_err(to_js_error)?;
    // Plain objects rather than JS Maps for the flattened ticket fields
    result
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| to_js_error(ClusterError::Json(err.to_string())))
}

fn to_js_error(err: ClusterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
