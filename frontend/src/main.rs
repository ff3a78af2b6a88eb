mod api;
mod components;

use api::{HttpPredictionClient, default_endpoint, fetch_client_config};
use components::chart::render_chart;
use components::form_section::render_form_section;
use components::header::render_header;
use components::results::render_results;
use components::utils::{render_error_message, viewport_width};
use shared::{
    ClientConfig, Completion, PredictionClient, PredictionResult, RequestToken,
    SubmissionController, SubmissionFailure, SubmitTicket, VitalField, is_small_viewport,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // Form
    FieldChanged(VitalField, String),
    Submit,
    Reset,

    // Network
    PredictionFinished(RequestToken, Result<PredictionResult, SubmissionFailure>),
    ConfigLoaded(ClientConfig),
}

// Main component
pub struct Model {
    controller: SubmissionController,
    endpoint: String,
    results_ref: NodeRef,
    scroll_pending: bool,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match fetch_client_config().await {
                Ok(config) => link.send_message(Msg::ConfigLoaded(config)),
                Err(e) => log::warn!("Using built-in prediction endpoint: {}", e),
            }
        });

        Self {
            controller: SubmissionController::new(),
            endpoint: default_endpoint(),
            results_ref: NodeRef::default(),
            scroll_pending: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FieldChanged(field, value) => {
                self.controller.set_field(field, value);
                true
            }
            Msg::Submit => self.handle_submit(ctx),
            Msg::Reset => {
                self.controller.reset();
                self.scroll_pending = false;
                true
            }
            Msg::PredictionFinished(token, outcome) => self.handle_prediction(token, outcome),
            Msg::ConfigLoaded(config) => {
                log::info!("Prediction endpoint: {}", config.prediction_url);
                self.endpoint = config.prediction_url;
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    { render_form_section(self, ctx) }
                    { render_error_message(self) }
                    <div ref={self.results_ref.clone()} id="results">
                        { render_results(self) }
                        { render_chart(self) }
                    </div>
                </main>

                <footer class="app-footer">
                    <p>{"CardioCheck | Results are not a substitute for professional medical advice"}</p>
                </footer>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.scroll_pending {
            self.scroll_pending = false;
            self.scroll_results_into_view();
        }
    }
}

// Handler methods
impl Model {
    fn handle_submit(&mut self, ctx: &Context<Self>) -> bool {
        if self.controller.is_loading() {
            return false;
        }

        let ticket = self.controller.begin_submit();
        self.send_prediction_request(ctx, ticket);
        true
    }

    fn handle_prediction(
        &mut self,
        token: RequestToken,
        outcome: Result<PredictionResult, SubmissionFailure>,
    ) -> bool {
        match self.controller.complete(token, outcome) {
            Completion::Succeeded => {
                self.scroll_pending = viewport_width().is_some_and(is_small_viewport);
                true
            }
            Completion::Failed => true,
            Completion::Ignored => false,
        }
    }

    fn send_prediction_request(&self, ctx: &Context<Self>, ticket: SubmitTicket) {
        let link = ctx.link().clone();
        let endpoint = self.endpoint.clone();

        spawn_local(async move {
            let outcome = HttpPredictionClient
                .predict(&endpoint, &ticket.inputs)
                .await;
            link.send_message(Msg::PredictionFinished(ticket.token, outcome));
        });
    }

    fn scroll_results_into_view(&self) {
        if let Some(element) = self.results_ref.cast::<web_sys::Element>() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("CardioCheck starting...");
    yew::Renderer::<Model>::new().render();
}
