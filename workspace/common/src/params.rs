use chrono::NaiveDate;
use tracing::warn;

use crate::error::{DashboardError, Result};

/// Format used by the start-date picker and the `start_date` form field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Start date proposed by the tuning form until the user picks another one
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 4, 5).unwrap_or(NaiveDate::MIN)
}

/// Bounds and page ids of one parameter slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub label: &'static str,
    /// Form field name sent to the backend
    pub name: &'static str,
    pub input_id: &'static str,
    /// Id of the `<output>` element mirroring the slider position
    pub output_id: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Position used when the backend does not seed a value
    pub default: f64,
}

pub const REPRODUCTION_NUMBER: SliderSpec = SliderSpec {
    label: "Reproduction Number",
    name: "r_0",
    input_id: "r_0_id",
    output_id: "r_0_out_id",
    min: 0.0,
    max: 10.0,
    step: 0.05,
    default: 2.5,
};

pub const INCUBATION_PERIOD: SliderSpec = SliderSpec {
    label: "Incubation Period",
    name: "inc_per",
    input_id: "inc_per_id",
    output_id: "inc_per_out_id",
    min: 0.0,
    max: 31.0,
    step: 1.0,
    default: 5.0,
};

pub const RECOVERY_TIME: SliderSpec = SliderSpec {
    label: "Recovery Time",
    name: "rec_time",
    input_id: "rec_time_id",
    output_id: "rec_time_out_id",
    min: 0.0,
    max: 31.0,
    step: 1.0,
    default: 14.0,
};

pub const TIME_STEPS: SliderSpec = SliderSpec {
    label: "Time Steps",
    name: "time_steps",
    input_id: "time_steps_id",
    output_id: "time_steps_out_id",
    min: 1.0,
    max: 730.0,
    step: 1.0,
    default: 100.0,
};

impl SliderSpec {
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Text shown in the paired `<output>` element for `value`.
    pub fn format(&self, value: f64) -> String {
        value.to_string()
    }

    /// Parses the text of the paired `<output>` element.
    pub fn parse(&self, text: &str) -> Result<f64> {
        let value: f64 = text
            .trim()
            .parse()
            .map_err(|_| DashboardError::invalid(self.name, text))?;
        if !self.contains(value) {
            return Err(DashboardError::invalid(self.name, text));
        }
        Ok(value)
    }

    /// Like [`parse`](Self::parse) but for sliders stepping in whole days.
    pub fn parse_whole(&self, text: &str) -> Result<u32> {
        let value = self.parse(text)?;
        if value.fract() != 0.0 {
            return Err(DashboardError::invalid(self.name, text));
        }
        Ok(value as u32)
    }

    /// Turns an optional backend-provided value into a valid slider position.
    pub fn seed(&self, value: Option<f64>) -> f64 {
        match value {
            None => self.default,
            Some(v) if !v.is_finite() => {
                warn!(slider = self.name, "Non-finite seed value, using default");
                self.default
            }
            Some(v) if !self.contains(v) => {
                let clamped = v.clamp(self.min, self.max);
                warn!(slider = self.name, value = v, clamped, "Seed value out of range");
                clamped
            }
            Some(v) => v,
        }
    }

    pub fn seed_whole(&self, value: Option<f64>) -> u32 {
        self.seed(value).round() as u32
    }
}

/// Which control occupies the fourth column of the parameter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizonKind {
    TimeSteps,
    StartDate,
}

impl HorizonKind {
    pub fn field_name(&self) -> &'static str {
        match self {
            HorizonKind::TimeSteps => TIME_STEPS.name,
            HorizonKind::StartDate => "start_date",
        }
    }
}

/// How far (or from when) the backend should run the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Number of simulated days
    TimeSteps(u32),
    /// First day the model is fitted against
    StartDate(NaiveDate),
}

impl Horizon {
    pub fn kind(&self) -> HorizonKind {
        match self {
            Horizon::TimeSteps(_) => HorizonKind::TimeSteps,
            Horizon::StartDate(_) => HorizonKind::StartDate,
        }
    }

    pub fn field_value(&self) -> String {
        match self {
            Horizon::TimeSteps(steps) => steps.to_string(),
            Horizon::StartDate(date) => date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Model parameters as chosen on the slider form.
///
/// Values outside their slider range are rejected by [`new`](Self::new) and
/// again by [`validate`](Self::validate) before any request is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    pub(crate) reproduction_number: f64,
    /// Days
    pub(crate) incubation_period: u32,
    /// Days
    pub(crate) recovery_time: u32,
    pub(crate) horizon: Horizon,
}

impl SimulationParameters {
    /// Validated constructor; every value must lie within its slider range.
    pub fn new(
        reproduction_number: f64,
        incubation_period: u32,
        recovery_time: u32,
        horizon: Horizon,
    ) -> Result<Self> {
        let params = Self {
            reproduction_number,
            incubation_period,
            recovery_time,
            horizon,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !REPRODUCTION_NUMBER.contains(self.reproduction_number) {
            return Err(DashboardError::invalid(
                REPRODUCTION_NUMBER.name,
                self.reproduction_number.to_string(),
            ));
        }
        if !INCUBATION_PERIOD.contains(f64::from(self.incubation_period)) {
            return Err(DashboardError::invalid(
                INCUBATION_PERIOD.name,
                self.incubation_period.to_string(),
            ));
        }
        if !RECOVERY_TIME.contains(f64::from(self.recovery_time)) {
            return Err(DashboardError::invalid(
                RECOVERY_TIME.name,
                self.recovery_time.to_string(),
            ));
        }
        if let Horizon::TimeSteps(steps) = self.horizon {
            if !TIME_STEPS.contains(f64::from(steps)) {
                return Err(DashboardError::invalid(TIME_STEPS.name, steps.to_string()));
            }
        }
        Ok(())
    }

    pub fn reproduction_number(&self) -> f64 {
        self.reproduction_number
    }

    pub fn incubation_period(&self) -> u32 {
        self.incubation_period
    }

    pub fn recovery_time(&self) -> u32 {
        self.recovery_time
    }

    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    pub fn time_steps(&self) -> Option<u32> {
        match self.horizon {
            Horizon::TimeSteps(steps) => Some(steps),
            Horizon::StartDate(_) => None,
        }
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        match self.horizon {
            Horizon::StartDate(date) => Some(date),
            Horizon::TimeSteps(_) => None,
        }
    }

    /// The four parameter fields in the order the backend documents them.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (REPRODUCTION_NUMBER.name, REPRODUCTION_NUMBER.format(self.reproduction_number)),
            (INCUBATION_PERIOD.name, self.incubation_period.to_string()),
            (RECOVERY_TIME.name, self.recovery_time.to_string()),
            (self.horizon.kind().field_name(), self.horizon.field_value()),
        ]
    }
}

/// Raw text read back from the form: the slider `<output>` displays, plus
/// the start-date input value in Tune mode.
///
/// The output text is used instead of the range input's value because the
/// display is what the user last saw while dragging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SliderReadings {
    pub reproduction_number: String,
    pub incubation_period: String,
    pub recovery_time: String,
    /// Time-steps display text or start-date input value
    pub horizon: String,
}

impl SliderReadings {
    /// What the form displays for `params`.
    pub fn from_parameters(params: &SimulationParameters) -> Self {
        Self {
            reproduction_number: REPRODUCTION_NUMBER.format(params.reproduction_number),
            incubation_period: params.incubation_period.to_string(),
            recovery_time: params.recovery_time.to_string(),
            horizon: params.horizon.field_value(),
        }
    }

    pub fn parse(&self, kind: HorizonKind) -> Result<SimulationParameters> {
        let reproduction_number = REPRODUCTION_NUMBER.parse(&self.reproduction_number)?;
        let incubation_period = INCUBATION_PERIOD.parse_whole(&self.incubation_period)?;
        let recovery_time = RECOVERY_TIME.parse_whole(&self.recovery_time)?;
        let horizon = match kind {
            HorizonKind::TimeSteps => Horizon::TimeSteps(TIME_STEPS.parse_whole(&self.horizon)?),
            HorizonKind::StartDate => {
                let date = NaiveDate::parse_from_str(self.horizon.trim(), DATE_FORMAT)
                    .map_err(|_| DashboardError::invalid("start_date", self.horizon.clone()))?;
                Horizon::StartDate(date)
            }
        };

        SimulationParameters::new(reproduction_number, incubation_period, recovery_time, horizon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(r_0: &str, inc_per: &str, rec_time: &str, horizon: &str) -> SliderReadings {
        SliderReadings {
            reproduction_number: r_0.to_string(),
            incubation_period: inc_per.to_string(),
            recovery_time: rec_time.to_string(),
            horizon: horizon.to_string(),
        }
    }

    #[test]
    fn test_slider_round_trip_at_bounds_and_midpoints() {
        let cases = [
            (0.0, 0, 0, 1),
            (5.0, 15, 15, 365),
            (10.0, 31, 31, 730),
        ];

        for (r_0, inc_per, rec_time, steps) in cases {
            let params =
                SimulationParameters::new(r_0, inc_per, rec_time, Horizon::TimeSteps(steps))
                    .expect("values within slider ranges");
            let shown = SliderReadings::from_parameters(&params);

            assert_eq!(shown.reproduction_number, r_0.to_string());
            assert_eq!(shown.incubation_period, inc_per.to_string());
            assert_eq!(shown.recovery_time, rec_time.to_string());
            assert_eq!(shown.horizon, steps.to_string());

            let read_back = shown.parse(HorizonKind::TimeSteps).unwrap();
            assert_eq!(read_back, params);
        }
    }

    #[test]
    fn test_whole_numbers_display_without_fraction() {
        assert_eq!(REPRODUCTION_NUMBER.format(5.0), "5");
        assert_eq!(REPRODUCTION_NUMBER.format(2.5), "2.5");
        assert_eq!(REPRODUCTION_NUMBER.format(0.05), "0.05");
    }

    #[test]
    fn test_parse_rejects_out_of_range_values() {
        let err = readings("10.5", "5", "14", "100")
            .parse(HorizonKind::TimeSteps)
            .unwrap_err();
        assert_eq!(err, DashboardError::invalid("r_0", "10.5"));

        let err = readings("2", "32", "14", "100")
            .parse(HorizonKind::TimeSteps)
            .unwrap_err();
        assert_eq!(err, DashboardError::invalid("inc_per", "32"));

        let err = readings("2", "5", "14", "0")
            .parse(HorizonKind::TimeSteps)
            .unwrap_err();
        assert_eq!(err, DashboardError::invalid("time_steps", "0"));

        let err = readings("2", "5", "14", "731")
            .parse(HorizonKind::TimeSteps)
            .unwrap_err();
        assert_eq!(err, DashboardError::invalid("time_steps", "731"));
    }

    #[test]
    fn test_parse_rejects_fractional_days_and_garbage() {
        assert!(readings("2", "5.5", "14", "100").parse(HorizonKind::TimeSteps).is_err());
        assert!(readings("abc", "5", "14", "100").parse(HorizonKind::TimeSteps).is_err());
        assert!(readings("", "5", "14", "100").parse(HorizonKind::TimeSteps).is_err());
        assert!(readings("NaN", "5", "14", "100").parse(HorizonKind::TimeSteps).is_err());
    }

    #[test]
    fn test_parse_start_date() {
        let params = readings("1.8", "6", "10", "2020-04-05")
            .parse(HorizonKind::StartDate)
            .unwrap();
        assert_eq!(params.start_date(), Some(default_start_date()));
        assert_eq!(params.time_steps(), None);

        let err = readings("1.8", "6", "10", "04/05/2020")
            .parse(HorizonKind::StartDate)
            .unwrap_err();
        assert_eq!(err, DashboardError::invalid("start_date", "04/05/2020"));
    }

    #[test]
    fn test_form_fields_follow_horizon() {
        let simulate =
            SimulationParameters::new(2.5, 5, 14, Horizon::TimeSteps(100)).unwrap();
        assert_eq!(
            simulate.form_fields(),
            vec![
                ("r_0", "2.5".to_string()),
                ("inc_per", "5".to_string()),
                ("rec_time", "14".to_string()),
                ("time_steps", "100".to_string()),
            ]
        );

        let tune =
            SimulationParameters::new(2.5, 5, 14, Horizon::StartDate(default_start_date())).unwrap();
        let fields = tune.form_fields();
        assert_eq!(fields[3], ("start_date", "2020-04-05".to_string()));
        assert!(fields.iter().all(|(name, _)| *name != "time_steps"));
    }

    #[test]
    fn test_validate_catches_values_set_inside_the_crate() {
        let params = SimulationParameters {
            reproduction_number: 50.0,
            incubation_period: 5,
            recovery_time: 14,
            horizon: Horizon::TimeSteps(100),
        };
        assert_eq!(params.validate(), Err(DashboardError::invalid("r_0", "50")));

        let params = SimulationParameters {
            reproduction_number: 2.5,
            incubation_period: 5,
            recovery_time: 14,
            horizon: Horizon::TimeSteps(5000),
        };
        assert_eq!(
            params.validate(),
            Err(DashboardError::invalid("time_steps", "5000"))
        );
    }

    #[test]
    fn test_seed_clamps_and_defaults() {
        assert_eq!(REPRODUCTION_NUMBER.seed(None), 2.5);
        assert_eq!(REPRODUCTION_NUMBER.seed(Some(12.0)), 10.0);
        assert_eq!(REPRODUCTION_NUMBER.seed(Some(-1.0)), 0.0);
        assert_eq!(REPRODUCTION_NUMBER.seed(Some(f64::NAN)), 2.5);
        assert_eq!(TIME_STEPS.seed_whole(Some(0.0)), 1);
        assert_eq!(INCUBATION_PERIOD.seed_whole(Some(5.2)), 5);
    }
}
