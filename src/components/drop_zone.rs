use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::model::{ColorKind, ShapeKind};
use crate::state::{Bounds, DRAG_FORMAT};

#[derive(Properties, PartialEq, Clone)]
pub struct DropZoneProps {
    pub color: ColorKind,
    pub connected: Option<ShapeKind>,
    #[prop_or(false)]
    pub highlighted: bool,
    pub on_enter: Callback<ColorKind>,
    /// Zone color, zone rectangle and pointer position.
    pub on_leave: Callback<(ColorKind, Bounds, f64, f64)>,
    /// Zone color, dragged payload and the `data-color` found under the drop.
    pub on_drop: Callback<(ColorKind, Option<String>, Option<String>)>,
}

#[function_component]
pub fn DropZone(props: &DropZoneProps) -> Html {
    let zone_ref = use_node_ref();
    let color = props.color;

    let over_cb = Callback::from(|e: DragEvent| {
        e.prevent_default();
        if let Some(dt) = e.data_transfer() {
            dt.set_drop_effect("move");
        }
    });
    let enter_cb = {
        let cb = props.on_enter.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            cb.emit(color);
        })
    };
    let leave_cb = {
        let cb = props.on_leave.clone();
        let zone_ref = zone_ref.clone();
        Callback::from(move |e: DragEvent| {
            let Some(zone) = zone_ref.cast::<HtmlElement>() else {
                return;
            };
            let bounds = Bounds::from(zone.get_bounding_client_rect());
            cb.emit((color, bounds, e.client_x() as f64, e.client_y() as f64));
        })
    };
    let drop_cb = {
        let cb = props.on_drop.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            let shape = e.data_transfer().and_then(|dt| dt.get_data(DRAG_FORMAT).ok());
            let color_attr = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("[data-color]").ok().flatten())
                .and_then(|zone| zone.get_attribute("data-color"));
            cb.emit((color, shape, color_attr));
        })
    };

    let (status, border) = match props.connected {
        Some(shape) => (format!("{} connected!", shape.name()), format!("2px solid {}", color.stroke())),
        None => ("Waiting for shape...".to_string(), "2px dashed #9ca3af".to_string()),
    };
    let background = if props.highlighted { "#eef2ff" } else { "#fff" };
    html! {
        <div ref={zone_ref}
            class={classes!("drop-zone", props.connected.is_some().then_some("connected"), props.highlighted.then_some("drag-over"))}
            data-color={color.id()}
            ondragover={over_cb} ondragenter={enter_cb} ondragleave={leave_cb} ondrop={drop_cb}
            style={format!("min-width:150px; padding:12px; border:{}; border-radius:10px; background:{};", border, background)}>
            <div style="display:flex; align-items:center; gap:8px; font-weight:600;">
                <span style={format!("display:inline-block; width:14px; height:14px; border-radius:50%; background:{};", color.fill())}></span>
                <span>{ format!("{} {}", color.icon(), color.name()) }</span>
            </div>
            <div class="connection-status" style="font-size:12px; margin-top:6px; opacity:0.8;">{ status }</div>
        </div>
    }
}
