//! Selection <-> query string codec.
//!
//! The selection lives in the `counties` query parameter. Its value is a
//! JSON string literal whose content is the county names joined with `|`,
//! percent-encoded for the URL:
//!
//! ```text
//! ?counties=%22San%20Francisco%2C%20California%7CNew%20York%20City%2C%20New%20York%22
//! ```
//!
//! Empty segments are dropped on decode, so an empty selection decodes to
//! an empty list. Names containing `|` cannot be represented.

use crate::config::Config;
use crate::models::{error::AppError, selection::Selection};

const SEPARATOR: char = '|';

/// Encodes county names as the JSON-quoted, pipe-joined parameter value.
pub fn encode_selection<S: AsRef<str>>(counties: &[S]) -> String {
    let joined = counties
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("|");
    // Serializing a `str` cannot fail
    serde_json::to_string(&joined).unwrap_or_default()
}

/// Decodes a parameter value produced by [`encode_selection`].
pub fn decode_selection(value: &str) -> Result<Vec<String>, AppError> {
    let joined: String = serde_json::from_str(value)
        .map_err(|e| AppError::QueryError(format!("Invalid {} value: {e}", Config::QUERY_PARAM)))?;

    Ok(joined
        .split(SEPARATOR)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect())
}

/// Builds the query string (with leading `?`) holding the selection.
pub fn to_query<S: AsRef<str>>(counties: &[S]) -> String {
    format!(
        "?{}={}",
        Config::QUERY_PARAM,
        urlencoding::encode(&encode_selection(counties))
    )
}

/// Reads the selection from a query string such as `location.search`.
///
/// Returns an empty list when the parameter is absent or empty.
pub fn selection_from_query(search: &str) -> Result<Vec<String>, AppError> {
    let query = search.strip_prefix('?').unwrap_or(search);

    let Some(raw) = query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == Config::QUERY_PARAM).then_some(value)
    }) else {
        return Ok(Vec::new());
    };

    if raw.is_empty() {
        return Ok(Vec::new());
    }

    // Form encoding may carry spaces as '+'; a literal plus is always %2B
    let plus_decoded = raw.replace('+', " ");
    let value = urlencoding::decode(&plus_decoded)
        .map_err(|e| AppError::QueryError(format!("Invalid percent-encoding: {e}")))?;

    decode_selection(&value)
}

/// Selection to start the session with: the URL's list if it has one,
/// otherwise the defaults.
pub fn initial_selection(search: &str) -> Result<Selection, AppError> {
    let names = selection_from_query(search)?;
    if names.is_empty() {
        Ok(Selection::defaults())
    } else {
        Ok(Selection::from_names(names))
    }
}
