pub mod form;
pub mod readings;
pub mod slider;
pub mod start_date;
