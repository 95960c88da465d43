//! The skills radar chart as data, rendered to an ECharts option object.

use serde::Serialize;
use serde_json::{json, Value};

use crate::config::ChartConfig;

const NAVY: &str = "#1e3a8a";
const AMBER: &str = "#f59e0b";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    pub name: &'static str,
    pub max: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillChart {
    pub title: &'static str,
    pub axes: Vec<Axis>,
    pub series_name: &'static str,
    pub data_name: &'static str,
    pub values: Vec<u32>,
    pub split_number: u32,
    pub animation: ChartConfig,
}

impl SkillChart {
    /// The fixed six-axis self assessment shown on the page.
    pub fn skills(animation: ChartConfig) -> Self {
        let names = [
            "研究设计",
            "数据分析",
            "临床实践",
            "AI技术应用",
            "学术写作",
            "跨文化沟通",
        ];
        Self {
            title: "专业技能评估",
            axes: names.iter().map(|&name| Axis { name, max: 100 }).collect(),
            series_name: "技能水平",
            data_name: "当前水平",
            values: vec![95, 92, 90, 88, 94, 85],
            split_number: 5,
            animation,
        }
    }

    pub fn option(&self) -> Value {
        json!({
            "title": {
                "text": self.title,
                "left": "center",
                "textStyle": { "fontSize": 18, "fontWeight": "bold", "color": NAVY }
            },
            "radar": {
                "indicator": self.axes,
                "shape": "polygon",
                "splitNumber": self.split_number,
                "axisName": { "color": "#374151", "fontSize": 12 },
                "splitLine": { "lineStyle": { "color": "#e5e7eb" } },
                "splitArea": {
                    "show": true,
                    "areaStyle": {
                        "color": ["rgba(30, 58, 138, 0.05)", "rgba(245, 158, 11, 0.05)"]
                    }
                }
            },
            "series": [{
                "name": self.series_name,
                "type": "radar",
                "data": [{
                    "value": self.values,
                    "name": self.data_name,
                    "areaStyle": { "color": "rgba(30, 58, 138, 0.3)" },
                    "lineStyle": { "color": NAVY, "width": 2 },
                    "itemStyle": { "color": AMBER, "borderColor": NAVY, "borderWidth": 2 }
                }],
                "animationDuration": self.animation.animation_ms,
                "animationEasing": self.animation.animation_easing.echarts_name()
            }]
        })
    }
}
