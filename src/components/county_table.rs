use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{cases::CaseSummary, selection::Selection};
use crate::utils::format::with_commas;

#[derive(Properties, PartialEq)]
pub struct CountyTableProps {
    pub summary: Rc<CaseSummary>,
    /// Counties to list, already ranked and filtered
    pub counties: Vec<String>,
    pub selection: Selection,
    pub on_toggle: Callback<String>,
}

/// County list with selection checkboxes, cases and weekly growth
#[function_component(CountyTable)]
pub fn county_table(props: &CountyTableProps) -> Html {
    html! {
        <table class="county-table">
            <thead>
                <tr>
                    <th>{"County"}</th>
                    <th>{"Cases"}</th>
                    <th>{"Weekly growth"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    props.counties.iter().map(|county| {
                        let checked = props.selection.contains(county);
                        let cases = props.summary.cases(county).map(with_commas).unwrap_or_default();
                        let growth = props.summary.growth(county);

                        let onchange = {
                            let callback = props.on_toggle.clone();
                            let county = county.clone();
                            Callback::from(move |e: Event| {
                                // The state decides the box; a rejected toggle must not leave it ticked
                                let target: HtmlInputElement = e.target_unchecked_into();
                                target.set_checked(checked);
                                callback.emit(county.clone());
                            })
                        };

                        html! {
                            <tr key={county.clone()}>
                                <td class="county-cell">
                                    <label class="checkbox">
                                        <input type="checkbox" {checked} {onchange} />
                                        {county}
                                    </label>
                                </td>
                                <td class="cases-cell">{cases}</td>
                                <td class={classes!("growth-cell", growth.map(|g| g.css_class()))}>
                                    {growth.map(|g| g.label()).unwrap_or_default()}
                                </td>
                            </tr>
                        }
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
