use crate::content::ExplosionReport;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ExplosionCounterProps {
    pub on_open: Callback<()>,
}

#[function_component]
pub fn ExplosionCounter(props: &ExplosionCounterProps) -> Html {
    let report = ExplosionReport::from_registries();
    let click_cb = {
        let cb = props.on_open.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let key_cb = {
        let cb = props.on_open.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    html! {
        <div class="explosion-counter" role="button" tabindex="0" onclick={click_cb} onkeydown={key_cb}
            style="cursor:pointer; display:inline-flex; gap:24px; align-items:center; background:#fef2f2; border:1px solid #fca5a5; border-radius:10px; padding:12px 20px;">
            <div style="text-align:center;">
                <div style="font-size:28px; font-weight:700; color:#dc2626;">{ report.without_bridge().to_string() }</div>
                <div style="font-size:12px;">{ format!("{} × {} classes without Bridge", report.shapes, report.colors) }</div>
            </div>
            <div style="font-size:20px;">{"→"}</div>
            <div style="text-align:center;">
                <div style="font-size:28px; font-weight:700; color:#059669;">{ report.with_bridge().to_string() }</div>
                <div style="font-size:12px;">{ format!("{} + {} classes with Bridge", report.shapes, report.colors) }</div>
            </div>
            <div style="font-size:11px; opacity:0.7;">{"Click for the calculation"}</div>
        </div>
    }
}
