use common::params::{
    HorizonKind, INCUBATION_PERIOD, RECOVERY_TIME, REPRODUCTION_NUMBER, TIME_STEPS,
};
use common::{dom, DashboardError, Result, SliderReadings};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

/// Reads what the mounted form currently shows.
///
/// Slider values come from the text of their `<output>` displays; the start
/// date comes from the date input's value.
pub fn read_slider_values(kind: HorizonKind) -> Result<SliderReadings> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| DashboardError::MissingElement("document".to_string()))?;

    let horizon = match kind {
        HorizonKind::TimeSteps => output_text(&document, TIME_STEPS.output_id)?,
        HorizonKind::StartDate => document
            .get_element_by_id(dom::START_DATE_INPUT)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .ok_or_else(|| DashboardError::MissingElement(dom::START_DATE_INPUT.to_string()))?,
    };

    let readings = SliderReadings {
        reproduction_number: output_text(&document, REPRODUCTION_NUMBER.output_id)?,
        incubation_period: output_text(&document, INCUBATION_PERIOD.output_id)?,
        recovery_time: output_text(&document, RECOVERY_TIME.output_id)?,
        horizon,
    };
    log::trace!("Read slider values: {:?}", readings);
    Ok(readings)
}

fn output_text(document: &Document, id: &str) -> Result<String> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.text_content())
        .ok_or_else(|| DashboardError::MissingElement(id.to_string()))
}
