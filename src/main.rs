use yew::prelude::*;

use covid_dashboard::components::{CaseChart, CountyTable, SearchBox, SelectionNotice, Status};
use covid_dashboard::hooks::use_dashboard::use_dashboard;
use covid_dashboard::models::dashboard::DashboardAction;

#[function_component(App)]
fn app() -> Html {
    let state = use_dashboard();

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |county: String| state.dispatch(DashboardAction::Toggle(county)))
    };

    let on_search = {
        let state = state.clone();
        Callback::from(move |text: String| state.dispatch(DashboardAction::Search(text)))
    };

    let counties: Vec<String> = state
        .visible_counties()
        .into_iter()
        .map(str::to_string)
        .collect();

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"COVID-19 Cases by County"}</h1>
            </header>

            <main class="app-main">
                if let Some(summary) = state.data.clone() {
                    <section class="chart-section">
                        <CaseChart
                            summary={summary.clone()}
                            selection={state.selection.clone()}
                        />
                    </section>

                    <section class="table-section">
                        <SearchBox value={state.search.clone()} on_input={on_search} />
                        <SelectionNotice message={state.error.clone()} />
                        <CountyTable
                            {summary}
                            {counties}
                            selection={state.selection.clone()}
                            {on_toggle}
                        />
                    </section>
                }

                <Status loading={state.is_loading()} />
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
