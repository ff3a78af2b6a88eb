use super::super::Model;
use shared::{PredictionResult, diagnosis_category, recommendation};
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    match model.controller.prediction() {
        Some(result) => html! {
            <div class="results-container">
                { render_diagnosis_badge(result) }
                { render_recommendation(result) }
            </div>
        },
        None => html! {},
    }
}

fn render_diagnosis_badge(result: &PredictionResult) -> Html {
    let category = diagnosis_category(&result.prediction);

    html! {
        <div class="result-header">
            <h2>{"Diagnosis"}</h2>
            <span
                class={classes!("diagnosis-badge", category.css_class())}
                style={format!("background-color: {};", category.color())}
                title={category.description()}
            >
                <i class={category.icon()}></i>{ format!(" {}", result.prediction) }
            </span>
        </div>
    }
}

fn render_recommendation(result: &PredictionResult) -> Html {
    let rec = recommendation(&result.prediction);

    html! {
        <div
            class={classes!("recommendation-panel", rec.category.css_class())}
            style={format!("border-left: 4px solid {};", rec.category.color())}
        >
            <h3>{"Recommendation"}</h3>
            <p>{ rec.message }</p>
        </div>
    }
}
