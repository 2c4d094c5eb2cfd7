use common::dom;
use common::ChartSpec;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, figure: JsValue, layout: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct PlotlyChartProps {
    pub spec: Option<ChartSpec>,
}

/// Chart container; hands each new specification to `Plotly.newPlot` as is.
#[function_component(PlotlyChart)]
pub fn plotly_chart(props: &PlotlyChartProps) -> Html {
    use_effect_with(props.spec.clone(), |spec| {
        if let Some(spec) = spec {
            render(spec);
        }
        || ()
    });

    html! {
        <div id={dom::CHART_CONTAINER} class="chart-container"></div>
    }
}

fn render(spec: &ChartSpec) {
    // Objects must become plain JS objects, not Maps, for Plotly to read them
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    match spec.as_value().serialize(&serializer) {
        Ok(figure) => {
            log::trace!("Rendering chart into #{}", dom::CHART_CONTAINER);
            newPlot(dom::CHART_CONTAINER, figure, js_sys::Object::new().into());
        }
        Err(e) => log::error!("Failed to convert chart specification: {}", e),
    }
}
