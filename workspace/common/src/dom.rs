//! Element ids shared with the host page.
//!
//! The host page provides only [`MOUNT_POINT`] (or nothing, in which case the
//! dashboard mounts into `<body>`) and loads Plotly.js. Every other id below
//! is rendered by the dashboard itself: the trigger buttons, the title, the
//! chart and form containers. A host template must not carry its own
//! elements with these ids. Stylesheets may target them.

/// Element the dashboard mounts into
pub const MOUNT_POINT: &str = "simulation_dashboard";

pub const HISTORICAL_BUTTON: &str = "historical_btn";
pub const FORECAST_BUTTON: &str = "forecast_btn";
pub const TUNING_BUTTON: &str = "tuning_btn";

pub const PLOT_TITLE: &str = "plot_title";
pub const CHART_CONTAINER: &str = "historical_chart";

pub const FORM_CONTAINER: &str = "slider_form_container";
pub const FORM: &str = "form_id";
pub const FORM_ROW: &str = "form_row_id";
pub const SUBMIT_BUTTON: &str = "slider_btn";

/// Column wrapping the time-steps slider (Simulate mode only)
pub const TIME_STEPS_COLUMN: &str = "time_steps";
/// Column wrapping the start-date picker (Tune mode only)
pub const START_DATE_COLUMN: &str = "start_date";
pub const START_DATE_WRAPPER: &str = "start_date_id";
pub const START_DATE_INPUT: &str = "start_date_input_id";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rendered_ids_are_unique_and_distinct_from_mount_point() {
        let rendered = [
            HISTORICAL_BUTTON,
            FORECAST_BUTTON,
            TUNING_BUTTON,
            PLOT_TITLE,
            CHART_CONTAINER,
            FORM_CONTAINER,
            FORM,
            FORM_ROW,
            SUBMIT_BUTTON,
            TIME_STEPS_COLUMN,
            START_DATE_COLUMN,
            START_DATE_WRAPPER,
            START_DATE_INPUT,
        ];
        let unique: HashSet<_> = rendered.iter().collect();
        assert_eq!(unique.len(), rendered.len());
        assert!(!rendered.contains(&MOUNT_POINT));
    }
}
