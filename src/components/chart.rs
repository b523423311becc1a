use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        NameLocation, SplitLine, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use serde_json::{Value, json};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::cases::{CaseSummary, SeriesData};
use crate::models::selection::Selection;
use crate::utils::debounce::on_resize_settled;
use crate::utils::echarts_ffi::{dispose_chart, merge_option};

const CHART_ID: &str = "cases-chart";
const CURSOR_COLOR: &str = "#a483ed";
const LINE_WIDTH: u32 = 4;

#[derive(Properties, PartialEq)]
pub struct CaseChartProps {
    pub summary: Rc<CaseSummary>,
    pub selection: Selection,
}

/// Line chart of cumulative cases, one line per selected county
#[function_component(CaseChart)]
pub fn case_chart(props: &CaseChartProps) -> Html {
    let container_ref = use_node_ref();
    let series_data = use_memo(
        (props.summary.clone(), props.selection.clone()),
        |(summary, selection)| summary.series_data(selection),
    );

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (series_data, container_ref),
            |(series_data, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, series_data);

                    let series_data = series_data.clone();
                    on_resize_settled(Config::RESIZE_DEBOUNCE_MS, move || {
                        render_chart(&container, &series_data);
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, series_data: &SeriesData) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CHART_ID))
    else {
        return;
    };

    // A fresh instance, otherwise lines of deselected counties linger
    dispose_chart(&element);

    let chart = build_chart(series_data);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
        return;
    }

    if let Err(e) = merge_option(&element, &chart_overrides()) {
        web_sys::console::error_1(&format!("Chart option error: {e:?}").into());
    }
}

fn build_chart(series_data: &SeriesData) -> CharmingChart {
    let chart = CharmingChart::new()
        .tooltip(
            Tooltip::new().trigger(Trigger::Axis).axis_pointer(
                AxisPointer::new().type_(AxisPointerType::Line).line_style(
                    LineStyle::new()
                        .color(CURSOR_COLOR)
                        .width(2)
                        .type_(LineStyleType::Dashed),
                ),
            ),
        )
        .legend(Legend::new())
        .grid(
            Grid::new()
                .left("6%")
                .right("4%")
                .bottom("4%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series_data.dates.clone())
                .axis_label(AxisLabel::new().interval(Config::X_AXIS_LABEL_INTERVAL)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("cases")
                .name_location(NameLocation::Middle)
                .name_gap(60)
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().type_(LineStyleType::Dashed)),
                ),
        );

    series_data.lines.iter().fold(chart, |chart, line| {
        chart.series(
            Line::new()
                .name(line.county.as_str())
                .smooth(true)
                .show_symbol(false)
                .line_style(LineStyle::new().color(line.color).width(LINE_WIDTH))
                .item_style(ItemStyle::new().color(line.color))
                .data(line.values.clone()),
        )
    })
}

/// Option fragment merged after rendering. charming's `Tooltip` has no
/// `order`, so ascending tooltip sorting is set here.
fn chart_overrides() -> Value {
    json!({ "tooltip": { "order": "valueAsc" } })
}
