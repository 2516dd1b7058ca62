use wasm_bindgen::JsValue;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::content::ExplosionReport;
use crate::state::{ModalExample, ModalState};

#[derive(Properties, PartialEq, Clone)]
pub struct ConceptModalProps {
    pub state: ModalState,
    pub on_close: Callback<()>,
}

fn explosion_example(r: &ExplosionReport) -> Html {
    html! {<div class="calculator-demo">
        <h4 style="margin:8px 0 4px 0; color:#6C5CE7;">{"Without Bridge Pattern:"}</h4>
        <p style="margin:0 0 4px 0;">{"One type for each combination:"}</p>
        <ul style="margin:0 0 8px 18px; padding:0;">
            { for r.combinations.chunks(r.shapes.max(1)).map(|row| html!{ <li>{ row.join(", ") }</li> }) }
        </ul>
        <p><strong>{ format!("Result: {} × {} = {} types", r.shapes, r.colors, r.without_bridge()) }</strong></p>
        <h4 style="margin:8px 0 4px 0; color:#6C5CE7;">{"With Bridge Pattern:"}</h4>
        <ul style="margin:0 0 8px 18px; padding:0;">
            <li>{ format!("Shapes: {} types", r.shapes) }</li>
            <li>{ format!("Colors: {} types", r.colors) }</li>
        </ul>
        <p><strong>{ format!("Result: {} + {} = {} types", r.shapes, r.colors, r.with_bridge()) }</strong></p>
        <div class="calculation-formula" style="background:#6C5CE7; color:#fff; padding:10px 12px; border-radius:6px;">
            <div style="font-weight:600; color:#fbbf24;">{"Scalability"}</div>
            <div>{"n shapes and m colors: n × m types without Bridge, n + m with it."}</div>
        </div>
    </div>}
}

#[function_component]
pub fn ConceptModal(props: &ConceptModalProps) -> Html {
    let overlay_ref = use_node_ref();
    let close_ref = use_node_ref();

    // Focus the close button whenever a modal opens
    {
        let close_ref = close_ref.clone();
        let deps = (props.state.generation, props.state.is_open());
        use_effect_with(deps, move |&(_, open)| {
            if open {
                if let Some(btn) = close_ref.cast::<HtmlElement>() {
                    let _ = btn.focus();
                }
            }
            || ()
        });
    }

    let Some(content) = props.state.content() else {
        return html! {};
    };

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let overlay_cb = {
        let cb = props.on_close.clone();
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |e: MouseEvent| {
            // only clicks on the backdrop itself, not inside the dialog
            let target = e.target().map(JsValue::from);
            if target.is_some() && target == overlay_ref.get().map(JsValue::from) {
                cb.emit(());
            }
        })
    };
    let key_cb = {
        let cb = props.on_close.clone();
        let close_ref = close_ref.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Escape" => cb.emit(()),
            // the close button is the only focusable control; keep focus on it
            "Tab" => {
                e.prevent_default();
                if let Some(btn) = close_ref.cast::<HtmlElement>() {
                    let _ = btn.focus();
                }
            }
            _ => {}
        })
    };

    let opacity = if props.state.is_closing() { 0.0 } else { 1.0 };
    html! {<div class={classes!("concept-modal", props.state.is_closing().then_some("modal-closing"))}
        style={format!("position:fixed; inset:0; z-index:10000; opacity:{}; transition:opacity 0.3s ease-out;", opacity)}>
        <div ref={overlay_ref} class="modal-overlay" role="dialog" aria-modal="true" aria-labelledby="modal-title"
            onclick={overlay_cb} onkeydown={key_cb}
            style="position:absolute; inset:0; background:rgba(0,0,0,0.8); display:flex; align-items:center; justify-content:center; padding:2rem;">
            <div class="modal-content" style="background:#fff; border-radius:12px; max-width:700px; width:100%; max-height:85vh; overflow-y:auto;">
                <div class="modal-header" style="display:flex; justify-content:space-between; align-items:center; padding:24px 24px 12px; border-bottom:1px solid #e5e7eb;">
                    <h3 id="modal-title" style="margin:0; color:#6C5CE7;">{ content.title }</h3>
                    <button ref={close_ref} class="modal-close" aria-label="Close modal" onclick={close_cb}
                        style="background:none; border:none; font-size:1.5rem; cursor:pointer; padding:0.5rem;">{"×"}</button>
                </div>
                <div class="modal-body" style="padding:12px 24px 24px;">
                    <p>{ content.description }</p>
                    { match &content.example {
                        Some(ModalExample::Text(t)) => html!{ <div class="example-content" style="background:#f9fafb; padding:12px; border-radius:6px;">{ *t }</div> },
                        Some(ModalExample::Explosion(r)) => html!{ <div class="example-content" style="background:#f9fafb; padding:12px; border-radius:6px;">{ explosion_example(r) }</div> },
                        None => html!{},
                    } }
                    { if let Some(code) = content.code { html!{ <>
                        <h4 style="margin:16px 0 6px 0;">{"Code example:"}</h4>
                        <pre style="background:#111827; color:#fff; padding:12px; border-radius:6px; overflow-x:auto; font-size:13px; line-height:1.5;"><code>{ code }</code></pre>
                    </> } } else { html!{} } }
                </div>
            </div>
        </div>
    </div>}
}
