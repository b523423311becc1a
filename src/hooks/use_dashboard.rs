use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::use_query_selection::{load_selection_from_url, use_query_selection};
use crate::models::dashboard::{DashboardAction, DashboardState};
use crate::services::api::fetch_case_summary;
use wasm_bindgen_futures::spawn_local;

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Dashboard state: fetches the data once on mount and mirrors selection
/// changes into the URL.
#[hook]
pub fn use_dashboard() -> UseReducerHandle<DashboardState> {
    let state = use_reducer(|| DashboardState::new(load_selection_from_url()));

    {
        let dispatcher = state.dispatcher();

        use_effect_with((), move |_| {
            spawn_local(async move {
                // No retry: on failure the view stays in its loading state
                match fetch_case_summary().await {
                    Ok(summary) => {
                        gloo::console::log!(&format!(
                            "Loaded {} counties over {} days",
                            summary.counties().len(),
                            summary.window().len()
                        ));
                        dispatcher.dispatch(DashboardAction::DataLoaded(Rc::new(summary)));
                    }
                    Err(e) => gloo::console::error!(&format!("Failed to load case data: {e}")),
                }
            });

            || () // Cleanup
        });
    }

    use_query_selection(state.selection.clone(), state.revision);

    state
}
