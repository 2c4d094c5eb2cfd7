use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    pub on_dismiss: Callback<()>,
}

/// Shown next to the title when the last request failed; the title, chart and
/// form keep showing the previous result.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| {
            log::debug!("User dismissed error banner");
            on_dismiss.emit(());
        })
    };

    html! {
        <div class="alert alert-warning alert-dismissible d-flex justify-content-between" role="alert">
            <span>{"Could not update the chart: "}{&props.message}</span>
            <button type="button" class="close" aria-label="Close" onclick={on_dismiss}>
                <span aria-hidden="true">{"×"}</span>
            </button>
        </div>
    }
}
