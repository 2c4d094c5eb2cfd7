//! Platform-independent core of the simulation dashboard.
//!
//! Everything the browser shell needs to decide *what* to show lives here:
//! the request/response shapes exchanged with the simulation backend, the
//! parameter form layout, and the explicit form state machine. The wasm
//! frontend only supplies a [`controller::Transport`] and renders [`state::UiState`].

pub mod controller;
pub mod dom;
pub mod error;
pub mod form;
pub mod params;
pub mod request;
pub mod response;
pub mod state;

pub use controller::{Transport, ViewController};
pub use error::{DashboardError, Result};
pub use form::{FourthControl, ParameterForm, SliderControl, SubmitControl, build_parameter_form};
pub use params::{Horizon, HorizonKind, SimulationParameters, SliderReadings, SliderSpec};
pub use request::{Endpoint, Method, OutboundRequest, Trigger};
pub use response::{ChartResponse, ChartSpec};
pub use state::{FormMode, Transition, UiState};
