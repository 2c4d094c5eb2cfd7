//! Layout of the parameter slider form.
//!
//! The form is built from the current [`FormMode`]: the fourth column holds
//! either the time-steps slider or the start-date picker, never both, and the
//! submit control decides which request the form issues.

use chrono::NaiveDate;

use crate::dom;
use crate::error::Result;
use crate::params::{
    HorizonKind, INCUBATION_PERIOD, RECOVERY_TIME, REPRODUCTION_NUMBER, SimulationParameters,
    SliderReadings, SliderSpec, TIME_STEPS, default_start_date,
};
use crate::request::{Endpoint, Trigger};
use crate::state::FormMode;

/// A range input with its paired output display.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderControl {
    pub spec: SliderSpec,
    /// Initial text of both the input value and the output display
    pub value: String,
}

impl SliderControl {
    fn new(spec: SliderSpec, value: f64) -> Self {
        Self {
            spec,
            value: spec.format(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FourthControl {
    TimeSteps(SliderControl),
    StartDate { label: &'static str, value: NaiveDate },
}

impl FourthControl {
    pub fn kind(&self) -> HorizonKind {
        match self {
            FourthControl::TimeSteps(_) => HorizonKind::TimeSteps,
            FourthControl::StartDate { .. } => HorizonKind::StartDate,
        }
    }

    /// Id of the column wrapping this control.
    pub fn column_id(&self) -> &'static str {
        match self {
            FourthControl::TimeSteps(_) => dom::TIME_STEPS_COLUMN,
            FourthControl::StartDate { .. } => dom::START_DATE_COLUMN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitControl {
    Simulate,
    Tune,
}

impl SubmitControl {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitControl::Simulate => "Simulate",
            SubmitControl::Tune => "Tune",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterForm {
    /// Endpoint the form submits to
    pub action: Endpoint,
    pub sliders: [SliderControl; 3],
    pub fourth: FourthControl,
    pub submit: SubmitControl,
}

/// Builds the form for `mode`, or `None` when no form should be mounted.
pub fn build_parameter_form(mode: &FormMode) -> Option<ParameterForm> {
    let (values, action, submit) = match mode {
        FormMode::Absent => return None,
        FormMode::Simulate(values) => (values, Endpoint::Simulation, SubmitControl::Simulate),
        FormMode::Tune(values) => (values, Endpoint::Tuning, SubmitControl::Tune),
    };

    let sliders = [
        SliderControl::new(REPRODUCTION_NUMBER, values.reproduction_number),
        SliderControl::new(INCUBATION_PERIOD, f64::from(values.incubation_period)),
        SliderControl::new(RECOVERY_TIME, f64::from(values.recovery_time)),
    ];

    let fourth = match submit {
        SubmitControl::Simulate => FourthControl::TimeSteps(SliderControl::new(
            TIME_STEPS,
            f64::from(values.time_steps().unwrap_or(TIME_STEPS.default as u32)),
        )),
        SubmitControl::Tune => FourthControl::StartDate {
            label: "Start Date",
            value: values.start_date().unwrap_or_else(default_start_date),
        },
    };

    Some(ParameterForm {
        action,
        sliders,
        fourth,
        submit,
    })
}

impl ParameterForm {
    /// Ids of every control mounted by this form, in display order.
    pub fn control_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.sliders.iter().map(|s| s.spec.input_id).collect();
        ids.push(match &self.fourth {
            FourthControl::TimeSteps(slider) => slider.spec.input_id,
            FourthControl::StartDate { .. } => dom::START_DATE_INPUT,
        });
        ids
    }

    /// Turns what the form currently displays into the request its submit
    /// control issues.
    pub fn submit(&self, readings: &SliderReadings) -> Result<Trigger> {
        let params: SimulationParameters = readings.parse(self.fourth.kind())?;
        Ok(match self.submit {
            SubmitControl::Simulate => Trigger::Simulate(params),
            SubmitControl::Tune => Trigger::FineTune(params),
        })
    }
}
