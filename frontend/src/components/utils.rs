use super::super::Model;
use yew::prelude::*;

/// Current layout viewport width in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error_msg) = model.controller.error() {
        html! {
            <div class="error-message" role="alert">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}
