use tracing::{debug, warn};

use crate::form::{ParameterForm, build_parameter_form};
use crate::params::SimulationParameters;
use crate::response::ChartSpec;

pub const SIMULATION_TITLE: &str = "Simulation of COVID-19 Virus Effects in Canada";
pub const TUNING_TITLE: &str =
    "Fine Tuning: Please experiment with sliders to find optimal parameters.";

pub fn historical_title(last_updated: Option<&str>) -> String {
    format!(
        "Plot of Historical Data (Last Updated : {})",
        last_updated.unwrap_or("unknown")
    )
}

/// Which parameter form is mounted, and with which values.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormMode {
    #[default]
    Absent,
    /// Carries a time-steps horizon
    Simulate(SimulationParameters),
    /// Carries a start-date horizon
    Tune(SimulationParameters),
}

impl FormMode {
    pub fn is_mounted(&self) -> bool {
        !matches!(self, FormMode::Absent)
    }

    pub fn values(&self) -> Option<&SimulationParameters> {
        match self {
            FormMode::Absent => None,
            FormMode::Simulate(values) | FormMode::Tune(values) => Some(values),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormMode::Absent => "absent",
            FormMode::Simulate(_) => "simulate",
            FormMode::Tune(_) => "tune",
        }
    }
}

/// Outcome of one request, ready to be applied to [`UiState`].
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Historical {
        last_updated: Option<String>,
        chart: ChartSpec,
    },
    Forecast {
        chart: ChartSpec,
        values: SimulationParameters,
    },
    Tuning {
        chart: ChartSpec,
        values: SimulationParameters,
    },
    Simulated {
        chart: ChartSpec,
        values: SimulationParameters,
    },
    FineTuned {
        chart: ChartSpec,
    },
    /// The request failed; nothing but the error banner changes
    Failed {
        action: &'static str,
        message: String,
    },
}

/// Everything the dashboard displays.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub title: String,
    pub chart: Option<ChartSpec>,
    pub form: FormMode,
    /// Bumped whenever the form is rebuilt so the view remounts it
    pub form_revision: u64,
    pub last_error: Option<String>,
}

impl UiState {
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Historical {
                last_updated,
                chart,
            } => {
                self.remove_form();
                self.title = historical_title(last_updated.as_deref());
                self.show(chart);
            }
            Transition::Forecast { chart, values } => {
                self.title = SIMULATION_TITLE.to_string();
                self.rebuild_form(FormMode::Simulate(values));
                self.show(chart);
            }
            Transition::Tuning { chart, values } => {
                self.title = TUNING_TITLE.to_string();
                self.rebuild_form(FormMode::Tune(values));
                self.show(chart);
            }
            Transition::Simulated { chart, values } => {
                self.title = SIMULATION_TITLE.to_string();
                match &self.form {
                    FormMode::Simulate(current) if *current != values => {
                        self.rebuild_form(FormMode::Simulate(values));
                    }
                    FormMode::Simulate(_) => {}
                    other => {
                        warn!(form = other.name(), "Simulation result arrived while another form is mounted");
                    }
                }
                self.show(chart);
            }
            Transition::FineTuned { chart } => {
                self.show(chart);
            }
            Transition::Failed { action, message } => {
                debug!(action, "Keeping current view after failed request");
                self.last_error = Some(message);
            }
        }
    }

    pub fn parameter_form(&self) -> Option<ParameterForm> {
        build_parameter_form(&self.form)
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    fn show(&mut self, chart: ChartSpec) {
        self.chart = Some(chart);
        self.last_error = None;
    }

    fn rebuild_form(&mut self, mode: FormMode) {
        debug!(from = self.form.name(), to = mode.name(), "Rebuilding parameter form");
        self.form = mode;
        self.form_revision += 1;
    }

    fn remove_form(&mut self) {
        if self.form.is_mounted() {
            debug!(form = self.form.name(), "Removing parameter form");
            self.form = FormMode::Absent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Horizon, HorizonKind, default_start_date};

    fn chart(name: &str) -> ChartSpec {
        ChartSpec::parse(&format!(r#"{{"data":[],"layout":{{"title":"{name}"}}}}"#)).unwrap()
    }

    fn simulate_values(steps: u32) -> SimulationParameters {
        SimulationParameters::new(2.5, 5, 14, Horizon::TimeSteps(steps)).unwrap()
    }

    fn tune_values() -> SimulationParameters {
        SimulationParameters::new(2.5, 5, 14, Horizon::StartDate(default_start_date())).unwrap()
    }

    fn mounted_kinds(state: &UiState) -> Option<HorizonKind> {
        state.parameter_form().map(|form| form.fourth.kind())
    }

    #[test]
    fn test_historical_removes_any_form() {
        for form in [
            FormMode::Absent,
            FormMode::Simulate(simulate_values(100)),
            FormMode::Tune(tune_values()),
        ] {
            let mut state = UiState {
                form,
                ..UiState::default()
            };
            state.apply(Transition::Historical {
                last_updated: Some("2021-01-01".to_string()),
                chart: chart("historical"),
            });

            assert_eq!(state.form, FormMode::Absent);
            assert!(state.parameter_form().is_none());
            assert!(state.title.contains("2021-01-01"));
            assert_eq!(state.chart, Some(chart("historical")));
        }
    }

    #[test]
    fn test_historical_title_without_timestamp() {
        assert_eq!(
            historical_title(None),
            "Plot of Historical Data (Last Updated : unknown)"
        );
    }

    #[test]
    fn test_forecast_and_tuning_build_exactly_one_fourth_control() {
        let mut state = UiState::default();

        state.apply(Transition::Forecast {
            chart: chart("forecast"),
            values: simulate_values(100),
        });
        assert_eq!(state.title, SIMULATION_TITLE);
        assert_eq!(mounted_kinds(&state), Some(HorizonKind::TimeSteps));
        assert_eq!(state.form_revision, 1);

        state.apply(Transition::Tuning {
            chart: chart("tuning"),
            values: tune_values(),
        });
        assert_eq!(state.title, TUNING_TITLE);
        assert_eq!(mounted_kinds(&state), Some(HorizonKind::StartDate));
        assert_eq!(state.form_revision, 2);

        state.apply(Transition::Forecast {
            chart: chart("forecast"),
            values: simulate_values(50),
        });
        assert_eq!(mounted_kinds(&state), Some(HorizonKind::TimeSteps));
        assert_eq!(state.form_revision, 3);
    }

    #[test]
    fn test_simulated_refreshes_values_only_when_changed() {
        let mut state = UiState::default();
        state.apply(Transition::Forecast {
            chart: chart("forecast"),
            values: simulate_values(100),
        });

        state.apply(Transition::Simulated {
            chart: chart("run-1"),
            values: simulate_values(100),
        });
        assert_eq!(state.form_revision, 1);
        assert_eq!(state.chart, Some(chart("run-1")));

        state.apply(Transition::Simulated {
            chart: chart("run-2"),
            values: simulate_values(200),
        });
        assert_eq!(state.form_revision, 2);
        assert_eq!(state.form, FormMode::Simulate(simulate_values(200)));
    }

    #[test]
    fn test_late_simulation_result_keeps_tune_form() {
        let mut state = UiState::default();
        state.apply(Transition::Tuning {
            chart: chart("tuning"),
            values: tune_values(),
        });

        state.apply(Transition::Simulated {
            chart: chart("late"),
            values: simulate_values(100),
        });
        assert_eq!(state.form, FormMode::Tune(tune_values()));
        assert_eq!(state.chart, Some(chart("late")));
    }

    #[test]
    fn test_fine_tuned_updates_chart_only() {
        let mut state = UiState::default();
        state.apply(Transition::Tuning {
            chart: chart("tuning"),
            values: tune_values(),
        });
        let before = state.clone();

        state.apply(Transition::FineTuned {
            chart: chart("tuned"),
        });
        assert_eq!(state.title, before.title);
        assert_eq!(state.form, before.form);
        assert_eq!(state.form_revision, before.form_revision);
        assert_eq!(state.chart, Some(chart("tuned")));
    }

    #[test]
    fn test_failure_keeps_view_and_next_success_clears_error() {
        let mut state = UiState::default();
        state.apply(Transition::Forecast {
            chart: chart("forecast"),
            values: simulate_values(100),
        });
        let before = state.clone();

        state.apply(Transition::Failed {
            action: "simulate_btn",
            message: "HTTP error 500 from /simulation".to_string(),
        });
        assert_eq!(state.title, before.title);
        assert_eq!(state.chart, before.chart);
        assert_eq!(state.form, before.form);
        assert_eq!(state.last_error.as_deref(), Some("HTTP error 500 from /simulation"));

        state.apply(Transition::Simulated {
            chart: chart("ok"),
            values: simulate_values(100),
        });
        assert_eq!(state.last_error, None);
    }
}
