use web_sys::{HtmlCanvasElement, HtmlSelectElement};
use yew::prelude::*;

use super::app::AnnounceContext;
use crate::config;
use crate::draw::{paint_canvas, render_demo};
use crate::error::InputError;
use crate::model::{ColorKind, ShapeKind, parse_pair};
use crate::util::set_timeout;

/// Two dropdowns and a canvas: any shape, drawn in any color.
#[function_component(ShapeColorDemo)]
pub fn shape_color_demo() -> Html {
    let selection = use_state(|| (ShapeKind::Circle, ColorKind::Red));
    let canvas_ref = use_node_ref();
    let shape_ref = use_node_ref();
    let color_ref = use_node_ref();
    let pulse = use_state(|| false);
    let announce = use_context::<AnnounceContext>();

    // Redraw whenever the selected pair changes, including the initial one
    {
        let canvas_ref = canvas_ref.clone();
        let pulse = pulse.clone();
        let announce = announce.clone();
        use_effect_with(*selection, move |&(shape, color)| {
            match canvas_ref.cast::<HtmlCanvasElement>() {
                Some(canvas) => {
                    paint_canvas(&canvas, |s| render_demo(s, shape, color));
                    pulse.set(true);
                    set_timeout(config::PULSE_MS, move || pulse.set(false));
                    if let Some(ctx) = &announce {
                        ctx.announce.emit(format!("{} drawn in {}", shape, color));
                    }
                }
                None => log::warn!("{}", InputError::MissingElement("demo-canvas")),
            }
            || ()
        });
    }

    let change_cb = {
        let selection = selection.clone();
        let shape_ref = shape_ref.clone();
        let color_ref = color_ref.clone();
        Callback::from(move |_: Event| {
            let (Some(shape_sel), Some(color_sel)) = (
                shape_ref.cast::<HtmlSelectElement>(),
                color_ref.cast::<HtmlSelectElement>(),
            ) else {
                log::warn!("Shapes & Colors Demo elements not found");
                return;
            };
            match parse_pair(&shape_sel.value(), &color_sel.value()) {
                Ok(pair) => selection.set(pair),
                Err(e) => log::warn!("Invalid shape or color selection: {}", e),
            }
        })
    };

    let (shape, color) = *selection;
    let scale = if *pulse { 1.02 } else { 1.0 };
    html! {<div id="metaphor-demo" style={format!("display:flex; gap:20px; align-items:flex-start; flex-wrap:wrap; transition:transform 0.2s; transform:scale({});", scale)}>
        <div style="display:flex; flex-direction:column; gap:10px; min-width:200px;">
            <label style="display:flex; flex-direction:column; gap:4px;">
                <span>{"Shape (Abstraction)"}</span>
                <select ref={shape_ref} id="shape-selector" onchange={change_cb.clone()}>
                    { for ShapeKind::ALL.iter().map(|s| html!{ <option value={s.id()} selected={*s == shape}>{ s.name() }</option> }) }
                </select>
            </label>
            <label style="display:flex; flex-direction:column; gap:4px;">
                <span>{"Color (Implementor)"}</span>
                <select ref={color_ref} id="color-selector" onchange={change_cb}>
                    { for ColorKind::ALL.iter().map(|c| html!{ <option value={c.id()} selected={*c == color}>{ c.name() }</option> }) }
                </select>
            </label>
            <div style="font-size:13px;">
                {"Current: "}<strong id="current-shape">{ shape.name() }</strong>{" in "}<strong id="current-color">{ color.name() }</strong>
            </div>
        </div>
        <canvas ref={canvas_ref} id="demo-canvas"
            width={config::DEMO_CANVAS_WIDTH.to_string()}
            height={config::DEMO_CANVAS_HEIGHT.to_string()}
            style="border:1px solid #e5e7eb; border-radius:8px; background:#fff;" />
    </div>}
}
