use super::super::Model;
use super::utils::format_percent;
use shared::{ChartData, chart_data};
use yew::prelude::*;

/// Doughnut of the class probabilities, drawn with a CSS conic gradient.
pub fn render_chart(model: &Model) -> Html {
    let Some(result) = model.controller.prediction() else {
        return html! {};
    };
    if result.probabilities.is_empty() {
        return html! {
            <p class="no-results-message">{"No class probabilities were returned."}</p>
        };
    }
    let Some(chart) = chart_data(Some(result)) else {
        return html! {};
    };

    html! {
        <div class="detailed-results">
            <h3>{"Probability Distribution"}</h3>
            <div class="doughnut-wrapper">
                <div
                    class="doughnut"
                    role="img"
                    aria-label="Class probability chart"
                    style={format!("background: {};", chart.conic_gradient())}
                >
                    <div class="doughnut-hole"></div>
                </div>
                { render_legend(&chart) }
            </div>
        </div>
    }
}

fn render_legend(chart: &ChartData) -> Html {
    let percentages = chart.percentages();

    html! {
        <ul class="chart-legend">
            { for chart.labels.iter().enumerate().map(|(i, label)| {
                html! {
                    <li class="legend-item" key={label.clone()}>
                        <span class="legend-swatch" style={format!("background-color: {};", chart.colors[i])}></span>
                        <span class="legend-label">{ label }</span>
                        <span class="legend-value" title={format!("p = {:.3}", chart.values[i])}>
                            { format_percent(percentages[i]) }
                        </span>
                    </li>
                }
            })}
        </ul>
    }
}
