use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::{call_log_panel::CallLogPanel, drop_zone::DropZone, uml_diagram::UmlDiagram};
use super::app::AnnounceContext;
use crate::config;
use crate::draw::{paint_canvas, render_playground};
use crate::error::InputError;
use crate::model::{ColorKind, Playground, PlaygroundAction, ShapeKind};
use crate::state::{Bounds, DRAG_FORMAT, DropHighlight, HighlightAction, drop_request};
use crate::util::set_timeout;

#[derive(Properties, PartialEq, Clone)]
pub struct PlaygroundViewProps {
    pub playground: UseReducerHandle<Playground>,
}

#[function_component(PlaygroundView)]
pub fn playground_view(props: &PlaygroundViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let highlight = use_reducer(DropHighlight::default);
    let dragging = use_state(|| None::<ShapeKind>);
    let pulse = use_state(|| false);
    let announce = use_context::<AnnounceContext>();

    // Effect: repaint on every canvas version (mount included)
    {
        let canvas_ref = canvas_ref.clone();
        let pg = props.playground.clone();
        let version = props.playground.canvas_version;
        use_effect_with(version, move |_| {
            match canvas_ref.cast::<HtmlCanvasElement>() {
                Some(canvas) => paint_canvas(&canvas, |s| render_playground(s, &pg.store)),
                None => log::warn!("{}", InputError::MissingElement("playground-canvas")),
            }
            || ()
        });
    }
    // Effect: short scale pulse after draw-all
    {
        let pulse = pulse.clone();
        let version = props.playground.pulse_version;
        use_effect_with(version, move |_| {
            if version > 0 {
                pulse.set(true);
                set_timeout(config::PULSE_MS, move || pulse.set(false));
            }
            || ()
        });
    }

    let on_enter = {
        let highlight = highlight.clone();
        Callback::from(move |color: ColorKind| highlight.dispatch(HighlightAction::Enter(color)))
    };
    let on_leave = {
        let highlight = highlight.clone();
        Callback::from(move |(color, zone, x, y): (ColorKind, Bounds, f64, f64)| {
            highlight.dispatch(HighlightAction::Leave { color, zone, x, y })
        })
    };
    let on_drop = {
        let highlight = highlight.clone();
        let dragging = dragging.clone();
        let pg = props.playground.clone();
        let announce = announce.clone();
        Callback::from(move |(color, shape, color_attr): (ColorKind, Option<String>, Option<String>)| {
            highlight.dispatch(HighlightAction::Release(color));
            dragging.set(None);
            match drop_request(shape.as_deref(), color_attr.as_deref()) {
                Ok((shape, color)) => {
                    log::info!("Drop detected: {} → {}", shape.id(), color.id());
                    pg.dispatch(PlaygroundAction::Connect { shape, color });
                    if let Some(ctx) = &announce {
                        ctx.announce.emit(format!("{} connected to {}", shape, color));
                    }
                }
                Err(e) => log::warn!("Drop failed - {}", e),
            }
        })
    };

    let draw_cb = {
        let pg = props.playground.clone();
        Callback::from(move |_| pg.dispatch(PlaygroundAction::DrawAll))
    };
    let move_cb = {
        let pg = props.playground.clone();
        Callback::from(move |_| pg.dispatch(PlaygroundAction::MoveAll))
    };
    let clear_cb = {
        let pg = props.playground.clone();
        Callback::from(move |_| pg.dispatch(PlaygroundAction::Reset))
    };

    let pg = &*props.playground;
    let disabled = !pg.actions_enabled();
    let scale = if *pulse { 1.02 } else { 1.0 };

    html! {<div style="display:flex; flex-direction:column; gap:14px;">
        <div style="display:flex; gap:24px; flex-wrap:wrap;">
            <div>
                <div style="font-weight:600; margin-bottom:6px;">{"Shapes (Abstraction)"}</div>
                <div style="display:flex; gap:8px;">
                    { for ShapeKind::ALL.iter().map(|&shape| {
                        let start_cb = {
                            let dragging = dragging.clone();
                            Callback::from(move |e: DragEvent| {
                                match e.data_transfer() {
                                    Some(dt) => {
                                        if dt.set_data(DRAG_FORMAT, shape.id()).is_err() {
                                            log::warn!("could not attach {} to drag", shape.id());
                                        }
                                    }
                                    None => log::warn!("drag without data transfer"),
                                }
                                dragging.set(Some(shape));
                            })
                        };
                        let end_cb = {
                            let dragging = dragging.clone();
                            let highlight = highlight.clone();
                            Callback::from(move |_: DragEvent| {
                                dragging.set(None);
                                highlight.dispatch(HighlightAction::Clear);
                            })
                        };
                        let opacity = if *dragging == Some(shape) { 0.5 } else { 1.0 };
                        html! {
                            <div class={classes!("draggable-item", "shape", (*dragging == Some(shape)).then_some("dragging"))}
                                draggable="true" data-shape={shape.id()}
                                ondragstart={start_cb} ondragend={end_cb}
                                style={format!("cursor:grab; user-select:none; padding:8px 12px; border:1px solid #c4b5fd; background:#f5f3ff; border-radius:8px; opacity:{};", opacity)}>
                                { format!("{} {}", shape.icon(), shape.name()) }
                            </div>
                        }
                    }) }
                </div>
            </div>
            <div style="flex:1;">
                <div style="font-weight:600; margin-bottom:6px;">{"Colors (Implementor)"}</div>
                <div style="display:flex; gap:8px; flex-wrap:wrap;">
                    { for ColorKind::ALL.iter().map(|&color| html! {
                        <DropZone
                            color={color}
                            connected={pg.store.get(color).map(|c| c.shape)}
                            highlighted={highlight.is_lit(color)}
                            on_enter={on_enter.clone()}
                            on_leave={on_leave.clone()}
                            on_drop={on_drop.clone()}
                        />
                    }) }
                </div>
            </div>
        </div>
        <div style="display:flex; gap:8px;">
            <button id="draw-all" class="action-btn" disabled={disabled} onclick={draw_cb} title="D">{"🎨 Draw all"}</button>
            <button id="move-all" class="action-btn" disabled={disabled} onclick={move_cb} title="M">{"🔀 Move all"}</button>
            <button id="clear-all" class="action-btn" disabled={disabled} onclick={clear_cb} title="C">{"🧹 Clear"}</button>
        </div>
        <canvas ref={canvas_ref} id="playground-canvas"
            width={config::PLAYGROUND_CANVAS_WIDTH.to_string()}
            height={config::PLAYGROUND_CANVAS_HEIGHT.to_string()}
            style={format!("border:1px solid #e5e7eb; border-radius:8px; background:#fff; transition:transform 0.2s; transform:scale({});", scale)} />
        <div style="display:grid; grid-template-columns:minmax(260px, 1fr) 2fr; gap:14px;">
            <CallLogPanel log={pg.log.clone()} />
            <UmlDiagram store={pg.store.clone()} />
        </div>
    </div>}
}
