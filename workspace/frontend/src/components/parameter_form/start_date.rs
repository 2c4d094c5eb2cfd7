use chrono::NaiveDate;
use common::dom;
use common::params::DATE_FORMAT;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StartDatePickerProps {
    pub label: AttrValue,
    pub value: NaiveDate,
}

#[function_component(StartDatePicker)]
pub fn start_date_picker(props: &StartDatePickerProps) -> Html {
    html! {
        <div id={dom::START_DATE_WRAPPER}>
            <p>{&props.label}</p>
            <input
                class="form-control"
                type="date"
                id={dom::START_DATE_INPUT}
                value={props.value.format(DATE_FORMAT).to_string()}
            />
        </div>
    }
}
