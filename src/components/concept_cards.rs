use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::content::Concept;
use crate::error::InputError;

#[derive(Properties, PartialEq, Clone)]
pub struct ConceptCardsProps {
    pub on_open: Callback<Concept>,
}

// Resolves the card an event came from through its `data-concept` attribute.
fn concept_of(target: Option<web_sys::EventTarget>) -> Result<Concept, InputError> {
    let id = target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("[data-concept]").ok().flatten())
        .and_then(|card| card.get_attribute("data-concept"))
        .ok_or(InputError::MissingElement("data-concept"))?;
    id.parse()
}

fn open(target: Option<web_sys::EventTarget>, cb: &Callback<Concept>) {
    match concept_of(target) {
        Ok(concept) => cb.emit(concept),
        Err(e) => log::warn!("ignoring concept card event: {}", e),
    }
}

#[function_component]
pub fn ConceptCards(props: &ConceptCardsProps) -> Html {
    let click_cb = {
        let cb = props.on_open.clone();
        Callback::from(move |e: MouseEvent| open(e.target(), &cb))
    };
    let key_cb = {
        let cb = props.on_open.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                open(e.target(), &cb);
            }
        })
    };
    html! {<div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(200px, 1fr)); gap:12px;">
        { for Concept::ALL.iter().map(|c| html! {
            <div class="concept-card" data-concept={c.id()} role="button" tabindex="0"
                onclick={click_cb.clone()} onkeydown={key_cb.clone()}
                style="cursor:pointer; background:#f9fafb; border:1px solid #e5e7eb; border-radius:10px; padding:14px;">
                <div style="font-weight:600; margin-bottom:4px;">{ c.card_title() }</div>
                <div style="font-size:13px; opacity:0.8;">{ c.card_summary() }</div>
            </div>
        }) }
    </div>}
}
