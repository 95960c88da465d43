#![cfg(not(target_arch = "wasm32"))]

use folio_wasm::chart::SkillChart;
use folio_wasm::config::ChartConfig;
use serde_json::json;

#[test]
fn six_axes_capped_at_one_hundred() {
    let chart = SkillChart::skills(ChartConfig::default());
    assert_eq!(chart.axes.len(), 6);
    assert!(chart.axes.iter().all(|a| a.max == 100));
    assert_eq!(chart.values, [95, 92, 90, 88, 94, 85]);
    assert!(chart.values.iter().all(|&v| v <= 100));
}

#[test]
fn option_carries_radar_layout_and_series() {
    let option = SkillChart::skills(ChartConfig::default()).option();

    let radar = &option["radar"];
    assert_eq!(radar["shape"], "polygon");
    assert_eq!(radar["splitNumber"], 5);
    let indicator = radar["indicator"].as_array().unwrap();
    assert_eq!(indicator.len(), 6);
    assert!(indicator.iter().all(|i| i["max"] == 100));
    assert_eq!(indicator[0]["name"], "研究设计");
    assert_eq!(indicator[5]["name"], "跨文化沟通");
    assert_eq!(option["title"]["text"], "专业技能评估");

    let series = &option["series"][0];
    assert_eq!(series["name"], "技能水平");
    assert_eq!(series["data"][0]["name"], "当前水平");
    assert_eq!(series["type"], "radar");
    assert_eq!(series["data"][0]["value"], json!([95, 92, 90, 88, 94, 85]));
    assert_eq!(series["animationDuration"], 2000);
    assert_eq!(series["animationEasing"], "cubicOut");
    assert_eq!(option["title"]["left"], "center");
}

#[test]
fn rendering_twice_gives_the_same_option() {
    let chart = SkillChart::skills(ChartConfig::default());
    assert_eq!(chart.option(), chart.option());
}
