use common::{dom, Trigger};
use yew::prelude::*;

use super::chart::PlotlyChart;
use crate::components::error::ErrorBanner;
use crate::components::parameter_form::form::ParameterFormView;
use crate::hooks::use_dashboard;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let dashboard = use_dashboard();
    let ui = &dashboard.store.ui;

    let on_click = |trigger: Trigger| {
        let run = dashboard.run.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            run.emit(trigger.clone());
        })
    };

    html! {
        <div class="container">
            <div class="d-flex justify-content-center mb-3">
                <button id={dom::HISTORICAL_BUTTON} class="btn btn-outline-primary mr-2" onclick={on_click(Trigger::Historical)}>
                    {"Historical Data"}
                </button>
                <button id={dom::FORECAST_BUTTON} class="btn btn-outline-primary mr-2" onclick={on_click(Trigger::Forecast)}>
                    {"Forecast"}
                </button>
                <button id={dom::TUNING_BUTTON} class="btn btn-outline-primary" onclick={on_click(Trigger::Tuning)}>
                    {"Fine Tuning"}
                </button>
            </div>

            <h4 id={dom::PLOT_TITLE} class="text-center">{&ui.title}</h4>

            {if let Some(message) = &ui.last_error {
                html! {
                    <ErrorBanner message={message.clone()} on_dismiss={dashboard.dismiss_error.clone()} />
                }
            } else {
                html! {}
            }}

            <PlotlyChart spec={ui.chart.clone()} />

            <div id={dom::FORM_CONTAINER}>
                {match ui.parameter_form() {
                    Some(form) => html! {
                        <ParameterFormView
                            key={ui.form_revision.to_string()}
                            form={form}
                            on_trigger={dashboard.run.clone()}
                            on_error={dashboard.report.clone()}
                        />
                    },
                    None => html! {},
                }}
            </div>
        </div>
    }
}
