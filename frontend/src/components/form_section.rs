use super::super::{Model, Msg};
use shared::VitalField;
use strum::IntoEnumIterator;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_form_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let loading = model.controller.is_loading();

    let handle_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    let handle_reset = link.callback(|_: MouseEvent| Msg::Reset);

    html! {
        <form class="vitals-form" onsubmit={handle_submit}>
            <div class="vitals-grid">
                { for VitalField::iter().map(|field| render_field(model, ctx, field)) }
            </div>
            <div class="button-container">
                <button type="submit" class="analyze-btn" disabled={loading}>
                    {
                        if loading {
                            html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                        } else {
                            html! { <><i class="fa-solid fa-heart-pulse"></i>{" Analyze Cardiac Health"}</> }
                        }
                    }
                </button>
                <button
                    type="button"
                    class="analyze-btn"
                    style="background-color: var(--danger-color);"
                    onclick={handle_reset}
                >
                    <i class="fa-solid fa-rotate-left"></i>{" Reset"}
                </button>
            </div>
        </form>
    }
}

fn render_field(model: &Model, ctx: &Context<Model>, field: VitalField) -> Html {
    let handle_input = ctx.link().callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FieldChanged(field, input.value())
    });

    html! {
        <div class="vital-field" key={field.key()}>
            <label for={field.key()}>
                { field.label() }
                <span class="vital-unit">{ format!(" ({})", field.unit()) }</span>
            </label>
            <input
                type="number"
                id={field.key()}
                name={field.key()}
                step={field.step()}
                placeholder={field.placeholder()}
                required=true
                value={model.controller.form().get(field).to_string()}
                oninput={handle_input}
            />
        </div>
    }
}
