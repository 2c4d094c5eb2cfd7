use common::SliderControl;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    pub control: SliderControl,
}

/// Range input with an `<output>` that follows the thumb while dragging.
#[function_component(Slider)]
pub fn slider(props: &SliderProps) -> Html {
    let spec = props.control.spec;
    let value = use_state(|| props.control.value.clone());

    let oninput = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            value.set(input.value());
        })
    };

    html! {
        <div class="slider">
            <p>{spec.label}</p>
            <input
                class="mr-2"
                type="range"
                name={spec.name}
                id={spec.input_id}
                value={(*value).clone()}
                min={spec.min.to_string()}
                max={spec.max.to_string()}
                step={spec.step.to_string()}
                {oninput}
            />
            <output name={format!("{}_out", spec.input_id)} id={spec.output_id}>{(*value).clone()}</output>
        </div>
    }
}
