use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{DashboardError, Result};
use crate::params::{
    Horizon, HorizonKind, INCUBATION_PERIOD, RECOVERY_TIME, REPRODUCTION_NUMBER,
    SimulationParameters, TIME_STEPS,
};

/// JSON body returned by both the simulation and the tuning endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartResponse {
    /// Serialized Plotly figure, opaque to the dashboard
    pub plot: String,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(rename = "R_0", default, deserialize_with = "number_or_text")]
    pub r_0: Option<f64>,
    #[serde(default, deserialize_with = "number_or_text")]
    pub inc_per: Option<f64>,
    #[serde(default, deserialize_with = "number_or_text")]
    pub rec_time: Option<f64>,
    #[serde(default, deserialize_with = "number_or_text")]
    pub time_steps: Option<f64>,
}

/// Seed values may arrive as JSON numbers or as numeric strings.
fn number_or_text<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Raw::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl ChartResponse {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Parses the embedded chart specification.
    pub fn chart(&self) -> Result<ChartSpec> {
        ChartSpec::parse(&self.plot)
    }

    /// Slider positions for a freshly built form, falling back to slider
    /// defaults for missing seeds and clamping out-of-range ones.
    pub fn seed_parameters(&self, kind: HorizonKind, start_date: NaiveDate) -> SimulationParameters {
        let horizon = match kind {
            HorizonKind::TimeSteps => Horizon::TimeSteps(TIME_STEPS.seed_whole(self.time_steps)),
            HorizonKind::StartDate => Horizon::StartDate(start_date),
        };

        SimulationParameters {
            reproduction_number: REPRODUCTION_NUMBER.seed(self.r_0),
            incubation_period: INCUBATION_PERIOD.seed_whole(self.inc_per),
            recovery_time: RECOVERY_TIME.seed_whole(self.rec_time),
            horizon,
        }
    }

    /// Values of an already mounted form after a resubmission: each seed the
    /// backend echoes replaces the submitted value, the rest are kept.
    pub fn refresh(&self, submitted: &SimulationParameters) -> SimulationParameters {
        let horizon = match (submitted.horizon, self.time_steps) {
            (Horizon::TimeSteps(_), Some(steps)) => {
                Horizon::TimeSteps(TIME_STEPS.seed_whole(Some(steps)))
            }
            (horizon, _) => horizon,
        };

        SimulationParameters {
            reproduction_number: self
                .r_0
                .map(|v| REPRODUCTION_NUMBER.seed(Some(v)))
                .unwrap_or(submitted.reproduction_number),
            incubation_period: self
                .inc_per
                .map(|v| INCUBATION_PERIOD.seed_whole(Some(v)))
                .unwrap_or(submitted.incubation_period),
            recovery_time: self
                .rec_time
                .map(|v| RECOVERY_TIME.seed_whole(Some(v)))
                .unwrap_or(submitted.recovery_time),
            horizon,
        }
    }

    pub fn has_seeds(&self) -> bool {
        self.r_0.is_some()
            || self.inc_per.is_some()
            || self.rec_time.is_some()
            || self.time_steps.is_some()
    }
}

/// A parsed chart specification, handed to the renderer untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec(Value);

impl ChartSpec {
    pub fn parse(plot: &str) -> Result<Self> {
        serde_json::from_str(plot)
            .map(ChartSpec)
            .map_err(|e| DashboardError::ChartSpec(e.to_string()))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Compact JSON text of the specification.
    pub fn to_json(&self) -> String {
        self.0.to_string()
    }
}
