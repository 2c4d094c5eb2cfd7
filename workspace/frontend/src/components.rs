pub mod dashboard;
pub mod error;
pub mod parameter_form;
