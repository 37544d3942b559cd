use serde_json::Value;
use tracing::debug;

use crate::types::ConvertError;

/// Parses a raw order export into a sequence of untyped order records.
///
/// Real exports are sometimes hand-edited fragments missing the outer array
/// brackets (a bare run of comma-separated objects). When the direct parse
/// fails, the text is retried once wrapped in `[` and `]`. Anything that
/// survives neither attempt is rejected as malformed; no further repair
/// heuristics are applied.
pub fn parse_orders(raw: &str) -> Result<Vec<Value>, ConvertError> {
    let document = match serde_json::from_str::<Value>(raw) {
        Ok(document) => document,
        Err(parse_error) => {
            debug!("Direct JSON parse failed, retrying with bracket repair: {parse_error}");

            let repaired = format!("[{raw}]");

            serde_json::from_str::<Value>(&repaired)
                .map_err(|_| ConvertError::malformed_input(&parse_error))?
        }
    };

    Ok(normalize(document))
}

/// A lone object (or any other non-array value) counts as a one-record export.
fn normalize(document: Value) -> Vec<Value> {
    match document {
        Value::Array(orders) => orders,
        single => vec![single]
    }
}
