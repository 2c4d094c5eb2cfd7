use crate::dom;
use crate::error::{DashboardError, Result};
use crate::params::{HorizonKind, SimulationParameters};

/// Backend resources the dashboard talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Simulation,
    Tuning,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Simulation => "/simulation",
            Endpoint::Tuning => "/tuning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A user action that results in exactly one backend request.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    Historical,
    Forecast,
    Tuning,
    /// Submit of the Simulate form
    Simulate(SimulationParameters),
    /// Submit of the Tune form
    FineTune(SimulationParameters),
}

impl Trigger {
    /// Value of the `btn` field identifying the action to the backend.
    pub fn button(&self) -> &'static str {
        match self {
            Trigger::Historical => dom::HISTORICAL_BUTTON,
            Trigger::Forecast => dom::FORECAST_BUTTON,
            Trigger::Simulate(_) => "simulate_btn",
            Trigger::Tuning | Trigger::FineTune(_) => dom::TUNING_BUTTON,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            Trigger::Historical | Trigger::Forecast | Trigger::Simulate(_) => Endpoint::Simulation,
            Trigger::Tuning | Trigger::FineTune(_) => Endpoint::Tuning,
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Trigger::Tuning => Method::Get,
            _ => Method::Post,
        }
    }

    pub fn request(&self) -> Result<OutboundRequest> {
        let mut fields = vec![("btn", self.button().to_string())];

        match self {
            Trigger::Historical | Trigger::Forecast | Trigger::Tuning => {}
            Trigger::Simulate(params) => {
                require_horizon(params, HorizonKind::TimeSteps)?;
                fields.extend(params.form_fields());
            }
            Trigger::FineTune(params) => {
                require_horizon(params, HorizonKind::StartDate)?;
                fields.extend(params.form_fields());
            }
        }

        Ok(OutboundRequest {
            method: self.method(),
            endpoint: self.endpoint(),
            fields,
        })
    }
}

fn require_horizon(params: &SimulationParameters, kind: HorizonKind) -> Result<()> {
    if params.horizon().kind() != kind {
        return Err(DashboardError::HorizonMismatch {
            expected: kind.field_name(),
        });
    }
    params.validate()
}

/// Transport-agnostic description of one form-encoded request.
///
/// GET requests carry `fields` as the query string, POST requests as an
/// `application/x-www-form-urlencoded` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: Method,
    pub endpoint: Endpoint,
    pub fields: Vec<(&'static str, String)>,
}

impl OutboundRequest {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(key, _)| *key).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Horizon, default_start_date};

    #[test]
    fn test_view_requests_only_carry_button() {
        let historical = Trigger::Historical.request().unwrap();
        assert_eq!(historical.method, Method::Post);
        assert_eq!(historical.endpoint.path(), "/simulation");
        assert_eq!(historical.fields, vec![("btn", "historical_btn".to_string())]);

        let forecast = Trigger::Forecast.request().unwrap();
        assert_eq!(forecast.method, Method::Post);
        assert_eq!(forecast.field("btn"), Some("forecast_btn"));

        let tuning = Trigger::Tuning.request().unwrap();
        assert_eq!(tuning.method, Method::Get);
        assert_eq!(tuning.endpoint.path(), "/tuning");
        assert_eq!(tuning.field_names(), vec!["btn"]);
    }

    #[test]
    fn test_simulate_request_fields() {
        let params = SimulationParameters::new(2.5, 5, 14, Horizon::TimeSteps(100)).unwrap();
        let request = Trigger::Simulate(params).request().unwrap();

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.endpoint, Endpoint::Simulation);
        assert_eq!(request.field("btn"), Some("simulate_btn"));
        assert_eq!(request.field("r_0"), Some("2.5"));
        assert_eq!(request.field("inc_per"), Some("5"));
        assert_eq!(request.field("rec_time"), Some("14"));
        assert_eq!(request.field("time_steps"), Some("100"));
        assert_eq!(
            request.field_names(),
            vec!["btn", "r_0", "inc_per", "rec_time", "time_steps"]
        );
    }

    #[test]
    fn test_fine_tune_request_never_sends_time_steps() {
        let params =
            SimulationParameters::new(1.2, 4, 9, Horizon::StartDate(default_start_date())).unwrap();
        let request = Trigger::FineTune(params).request().unwrap();

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.endpoint, Endpoint::Tuning);
        assert_eq!(request.field("btn"), Some("tuning_btn"));
        assert_eq!(request.field("start_date"), Some("2020-04-05"));
        assert_eq!(request.field("time_steps"), None);
    }

    #[test]
    fn test_mismatched_horizon_is_rejected() {
        let params = SimulationParameters::new(1.2, 4, 9, Horizon::TimeSteps(30)).unwrap();
        let err = Trigger::FineTune(params).request().unwrap_err();
        assert_eq!(err, DashboardError::HorizonMismatch { expected: "start_date" });

        let params =
            SimulationParameters::new(1.2, 4, 9, Horizon::StartDate(default_start_date())).unwrap();
        assert!(Trigger::Simulate(params).request().is_err());
    }

    #[test]
    fn test_out_of_range_parameters_are_rejected() {
        let params = SimulationParameters {
            reproduction_number: 2.0,
            incubation_period: 32,
            recovery_time: 14,
            horizon: Horizon::StartDate(default_start_date()),
        };
        let err = Trigger::FineTune(params).request().unwrap_err();
        assert_eq!(err, DashboardError::invalid("inc_per", "32"));
    }
}
