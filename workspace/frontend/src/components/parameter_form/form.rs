use common::{dom, DashboardError, FourthControl, ParameterForm, Trigger};
use yew::prelude::*;

use super::readings::read_slider_values;
use super::slider::Slider;
use super::start_date::StartDatePicker;
use crate::settings;

#[derive(Properties, PartialEq)]
pub struct ParameterFormProps {
    pub form: ParameterForm,
    pub on_trigger: Callback<Trigger>,
    pub on_error: Callback<DashboardError>,
}

/// Renders a [`ParameterForm`]. Remounted (via `key`) whenever the dashboard
/// rebuilds the form, which resets every slider to its seeded value.
#[function_component(ParameterFormView)]
pub fn parameter_form_view(props: &ParameterFormProps) -> Html {
    let form = &props.form;

    let onsubmit = {
        let form = form.clone();
        let on_trigger = props.on_trigger.clone();
        let on_error = props.on_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            match read_slider_values(form.fourth.kind()).and_then(|readings| form.submit(&readings)) {
                Ok(trigger) => {
                    log::info!("Submitting {} form", form.submit.label());
                    if let Trigger::FineTune(params) = &trigger {
                        if let Some(date) = params.start_date() {
                            settings::remember_start_date(date);
                        }
                    }
                    on_trigger.emit(trigger);
                }
                Err(err) => on_error.emit(err),
            }
        })
    };

    let fourth = match &form.fourth {
        FourthControl::TimeSteps(control) => html! {
            <div class="col-sm" id={dom::TIME_STEPS_COLUMN}>
                <Slider control={control.clone()} />
            </div>
        },
        FourthControl::StartDate { label, value } => html! {
            <div class="col-sm" id={dom::START_DATE_COLUMN}>
                <StartDatePicker label={*label} value={*value} />
            </div>
        },
    };

    html! {
        <form id={dom::FORM} action={form.action.path()} {onsubmit}>
            <div class="row" id={dom::FORM_ROW}>
                {for form.sliders.iter().map(|control| html! {
                    <div class="col-sm">
                        <Slider control={control.clone()} />
                    </div>
                })}
                {fourth}
            </div>
            <div class="mt-3 d-flex justify-content-center">
                <button id={dom::SUBMIT_BUTTON} type="submit" class="btn btn-primary">
                    {form.submit.label()}
                </button>
            </div>
        </form>
    }
}
