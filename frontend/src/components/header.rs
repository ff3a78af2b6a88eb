use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-heart-pulse"></i> {" CardioCheck"}</h1>
            <p class="subtitle">{"Enter patient vitals to assess cardiac health"}</p>
        </header>
    }
}
