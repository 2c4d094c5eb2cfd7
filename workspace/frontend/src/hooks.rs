use std::rc::Rc;

use common::{DashboardError, Transition, Trigger, UiState, ViewController};
use yew::prelude::*;

use crate::api_client::HttpTransport;
use crate::settings;

/// Reducer wrapper around the dashboard's [`UiState`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardStore {
    pub ui: UiState,
}

pub enum DashboardAction {
    Apply(Transition),
    DismissError,
}

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut ui = self.ui.clone();
        match action {
            DashboardAction::Apply(transition) => ui.apply(transition),
            DashboardAction::DismissError => ui.dismiss_error(),
        }
        Rc::new(Self { ui })
    }
}

#[derive(Clone)]
pub struct DashboardHandle {
    pub store: UseReducerHandle<DashboardStore>,
    /// Sends the request for a trigger and applies its outcome
    pub run: Callback<Trigger>,
    /// Reports an error raised before any request was sent
    pub report: Callback<DashboardError>,
    pub dismiss_error: Callback<()>,
}

#[hook]
pub fn use_dashboard() -> DashboardHandle {
    let store = use_reducer(DashboardStore::default);

    let run = {
        let dispatcher = store.dispatcher();
        use_callback((), move |trigger: Trigger, _| {
            let dispatcher = dispatcher.clone();
            log::debug!("Dashboard action: {}", trigger.button());

            wasm_bindgen_futures::spawn_local(async move {
                let settings = settings::get_settings();
                let controller = ViewController::new(HttpTransport::from_settings())
                    .with_start_date(settings.default_start_date);
                let transition = controller.resolve(trigger).await;
                dispatcher.dispatch(DashboardAction::Apply(transition));
            });
        })
    };

    let report = {
        let dispatcher = store.dispatcher();
        use_callback((), move |err: DashboardError, _| {
            log::error!("Form error: {}", err);
            dispatcher.dispatch(DashboardAction::Apply(Transition::Failed {
                action: common::dom::SUBMIT_BUTTON,
                message: err.to_string(),
            }));
        })
    };

    let dismiss_error = {
        let dispatcher = store.dispatcher();
        use_callback((), move |_: (), _| {
            dispatcher.dispatch(DashboardAction::DismissError);
        })
    };

    DashboardHandle {
        store,
        run,
        report,
        dismiss_error,
    }
}
