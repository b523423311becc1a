// Thin bindings to the ECharts global loaded by index.html. charming renders
// the chart; these cover what its option builders don't express.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// A live ECharts chart
    pub type EchartsInstance;

    #[wasm_bindgen(js_namespace = echarts, js_name = getInstanceByDom)]
    fn get_instance_by_dom(element: &Element) -> Option<EchartsInstance>;

    #[wasm_bindgen(js_namespace = echarts, js_name = dispose)]
    fn dispose(element: &Element);

    #[wasm_bindgen(method, js_name = setOption)]
    fn set_option(this: &EchartsInstance, option: &JsValue);

    #[wasm_bindgen(js_namespace = JSON, js_name = parse, catch)]
    fn json_parse(text: &str) -> Result<JsValue, JsValue>;
}

/// Drops any chart rendered into `element`, so the next render starts from
/// a clean option instead of merging into the old series list.
pub fn dispose_chart(element: &Element) {
    if get_instance_by_dom(element).is_some() {
        dispose(element);
    }
}

/// Merges `overrides` into the chart already rendered inside `element`.
pub fn merge_option(element: &Element, overrides: &serde_json::Value) -> Result<(), JsValue> {
    let instance = get_instance_by_dom(element)
        .ok_or_else(|| JsValue::from_str("No chart rendered in element"))?;
    let option = json_parse(&overrides.to_string())?;
    instance.set_option(&option);
    Ok(())
}
