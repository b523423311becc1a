use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::config::Config;
use crate::models::selection::Selection;
use crate::services::url_codec::{initial_selection, to_query};

/// Writes the selection into the query string whenever `revision` moves
/// past zero, replacing the history entry rather than navigating.
#[hook]
pub fn use_query_selection(selection: Selection, revision: u32) {
    use_effect_with(revision, move |revision| {
        if *revision > 0 {
            save_selection_to_url(&selection);
        }
        || ()
    });
}

/// Load the selection from the current URL, falling back to the defaults
pub fn load_selection_from_url() -> Selection {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    initial_selection(&search).unwrap_or_else(|e| {
        gloo::console::warn!(&format!(
            "Ignoring `{}` parameter: {e}",
            Config::QUERY_PARAM
        ));
        Selection::defaults()
    })
}

/// Save the selection to the URL without a page load
fn save_selection_to_url(selection: &Selection) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let path = window.location().pathname().unwrap_or_default();
    let url = format!("{path}{}", to_query(selection.as_slice()));

    let result = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));

    if let Err(e) = result {
        gloo::console::warn!(&format!("Failed to save selection: {e:?}"));
    }
}
