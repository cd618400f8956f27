use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use crate::api_client::analysis::RevenueStreams;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

/// Fixed slice palette, cycled by position when a report has more revenue
/// categories than colours.
pub const PALETTE: [&str; 5] = ["#6366f1", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6"];

/// One pie slice per revenue category, in the order the report carries them.
/// A report without revenue streams yields an empty series.
pub fn revenue_series(revenue: Option<&RevenueStreams>) -> Vec<(String, f64)> {
    revenue
        .map(|r| {
            r.categories
                .iter()
                .map(|(name, value)| (name.clone(), *value))
                .collect()
        })
        .unwrap_or_default()
}

pub fn slice_colors(count: usize) -> Vec<&'static str> {
    (0..count).map(|i| PALETTE[i % PALETTE.len()]).collect()
}

#[derive(Properties, PartialEq)]
pub struct RevenuePieChartProps {
    #[prop_or_default]
    pub revenue: Option<RevenueStreams>,
}

#[function_component(RevenuePieChart)]
pub fn revenue_pie_chart(props: &RevenuePieChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.revenue.clone()),
        move |(chart_ref, revenue)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let series = revenue_series(revenue.as_ref());
                let labels: Vec<&str> = series.iter().map(|(name, _)| name.as_str()).collect();
                let values: Vec<f64> = series.iter().map(|(_, value)| *value).collect();
                let colors = slice_colors(series.len());

                let trace = serde_json::json!([{
                    "labels": labels,
                    "values": values,
                    "type": "pie",
                    "hole": 0.0,
                    "marker": {"colors": colors},
                    "textinfo": "label+percent"
                }]);

                let layout = serde_json::json!({
                    "margin": {"t": 10, "r": 10, "l": 10, "b": 10},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "plot_bgcolor": "rgba(0,0,0,0)",
                    "showlegend": false
                });

                let config = serde_json::json!({"responsive": true, "displayModeBar": false});

                let div_id = element.id();
                if !div_id.is_empty() {
                    newPlot(
                        &div_id,
                        serde_wasm_bindgen::to_value(&trace).unwrap(),
                        serde_wasm_bindgen::to_value(&layout).unwrap(),
                        serde_wasm_bindgen::to_value(&config).unwrap(),
                    );
                }
            }
            || ()
        },
    );

    html! {
        <div ref={chart_ref} id="chart-revenue-pie" class="chart-container" style="height: 220px;"></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn missing_revenue_yields_empty_series() {
        assert!(revenue_series(None).is_empty());
    }

    #[test]
    fn empty_categories_yield_empty_series() {
        let revenue = RevenueStreams {
            total: 1000.0,
            categories: BTreeMap::new(),
        };
        assert!(revenue_series(Some(&revenue)).is_empty());
    }

    #[test]
    fn one_slice_per_category() {
        let revenue = RevenueStreams {
            total: 1000.0,
            categories: BTreeMap::from([
                ("Sales".to_string(), 700.0),
                ("Services".to_string(), 300.0),
            ]),
        };
        let series = revenue_series(Some(&revenue));
        assert_eq!(
            series,
            vec![
                ("Sales".to_string(), 700.0),
                ("Services".to_string(), 300.0)
            ]
        );
    }

    #[test]
    fn palette_cycles_by_position() {
        let colors = slice_colors(7);
        assert_eq!(colors.len(), 7);
        assert_eq!(colors[0], PALETTE[0]);
        assert_eq!(colors[4], PALETTE[4]);
        // Wrap-around past the palette size.
        assert_eq!(colors[5], PALETTE[0]);
        assert_eq!(colors[6], PALETTE[1]);
    }

    #[test]
    fn no_colors_for_empty_series() {
        assert!(slice_colors(0).is_empty());
    }
}
