use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, error, info, instrument};

use crate::error::Result;
use crate::params::{HorizonKind, SimulationParameters, default_start_date};
use crate::request::{OutboundRequest, Trigger};
use crate::response::ChartResponse;
use crate::state::Transition;

/// Sends one form-encoded request and yields the raw response body.
///
/// Implementations must map transport failures and non-success statuses to
/// [`DashboardError`](crate::DashboardError). Futures are not `Send`: the
/// browser runs everything on one thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &OutboundRequest) -> Result<String>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: &OutboundRequest) -> Result<String> {
        (**self).send(request).await
    }
}

/// Issues dashboard requests and turns responses into [`Transition`]s.
///
/// The controller holds no view state; callers apply the returned transition
/// to their [`UiState`](crate::UiState). Requests are not de-duplicated: if
/// the user clicks twice, both responses are applied in arrival order.
pub struct ViewController<T> {
    transport: T,
    start_date: NaiveDate,
}

impl<T: Transport> ViewController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            start_date: default_start_date(),
        }
    }

    /// Start date proposed by freshly built Tune forms.
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub async fn show_historical(&self) -> Result<Transition> {
        let response = self.fetch(&Trigger::Historical).await?;
        Ok(Transition::Historical {
            chart: response.chart()?,
            last_updated: response.last_updated,
        })
    }

    pub async fn show_forecast(&self) -> Result<Transition> {
        let response = self.fetch(&Trigger::Forecast).await?;
        Ok(Transition::Forecast {
            chart: response.chart()?,
            values: response.seed_parameters(HorizonKind::TimeSteps, self.start_date),
        })
    }

    pub async fn show_tuning(&self) -> Result<Transition> {
        let response = self.fetch(&Trigger::Tuning).await?;
        Ok(Transition::Tuning {
            chart: response.chart()?,
            values: response.seed_parameters(HorizonKind::StartDate, self.start_date),
        })
    }

    pub async fn submit_simulation(&self, params: &SimulationParameters) -> Result<Transition> {
        let response = self.fetch(&Trigger::Simulate(params.clone())).await?;
        Ok(Transition::Simulated {
            chart: response.chart()?,
            values: response.refresh(params),
        })
    }

    pub async fn submit_tuning(&self, params: &SimulationParameters) -> Result<Transition> {
        let response = self.fetch(&Trigger::FineTune(params.clone())).await?;
        Ok(Transition::FineTuned {
            chart: response.chart()?,
        })
    }

    pub async fn dispatch(&self, trigger: &Trigger) -> Result<Transition> {
        match trigger {
            Trigger::Historical => self.show_historical().await,
            Trigger::Forecast => self.show_forecast().await,
            Trigger::Tuning => self.show_tuning().await,
            Trigger::Simulate(params) => self.submit_simulation(params).await,
            Trigger::FineTune(params) => self.submit_tuning(params).await,
        }
    }

    /// Like [`dispatch`](Self::dispatch), folding errors into
    /// [`Transition::Failed`] so the caller always has something to apply.
    pub async fn resolve(&self, trigger: Trigger) -> Transition {
        match self.dispatch(&trigger).await {
            Ok(transition) => transition,
            Err(err) => {
                error!(action = trigger.button(), %err, "Dashboard request failed");
                Transition::Failed {
                    action: trigger.button(),
                    message: err.to_string(),
                }
            }
        }
    }

    #[instrument(skip(self), fields(btn = trigger.button()))]
    async fn fetch(&self, trigger: &Trigger) -> Result<ChartResponse> {
        let request = trigger.request()?;
        debug!(endpoint = request.endpoint.path(), fields = ?request.field_names(), "Sending request");

        let body = self.transport.send(&request).await?;
        let response = ChartResponse::from_json(&body)?;

        info!(endpoint = request.endpoint.path(), "Chart response received");
        Ok(response)
    }
}
