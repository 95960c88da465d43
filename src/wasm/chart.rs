use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::dom;
use super::listener::EventListener;
use crate::chart::SkillChart;
use crate::config::{ids, ChartConfig};
use crate::error::UiError;

#[wasm_bindgen]
extern "C" {
    /// An ECharts instance bound to one container.
    #[derive(Clone)]
    pub type ECharts;

    #[wasm_bindgen(catch, js_namespace = echarts, js_name = init)]
    fn echarts_init(dom: &HtmlElement) -> Result<ECharts, JsValue>;

    #[wasm_bindgen(method, catch, js_name = setOption)]
    fn set_option(this: &ECharts, option: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn resize(this: &ECharts);

    #[wasm_bindgen(method)]
    fn dispose(this: &ECharts);
}

/// The skills radar chart; disposed on drop.
pub struct SkillsChart {
    chart: ECharts,
    _resize: EventListener,
}

/// Render into `#skills-chart` if the page has one.
pub fn init(config: &ChartConfig) -> Result<Option<SkillsChart>, UiError> {
    let Some(container) = dom::optional_by_id(ids::SKILLS_CHART)? else {
        log::debug!("no #{}; chart skipped", ids::SKILLS_CHART);
        return Ok(None);
    };

    let chart = echarts_init(&container)?;
    let option = SkillChart::skills(config.clone()).option();
    chart.set_option(&js_sys::JSON::parse(&option.to_string())?)?;

    let window = dom::window()?;
    let handle = chart.clone();
    let resize = EventListener::new(&window, "resize", move |_| handle.resize())?;

    log::info!("skills chart rendered");
    Ok(Some(SkillsChart {
        chart,
        _resize: resize,
    }))
}

impl Drop for SkillsChart {
    fn drop(&mut self) {
        self.chart.dispose();
    }
}
