use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::state::nav::{NAV_LINKS, SectionBox, active_section, scroll_target};

fn nav_height(doc: &Document) -> f64 {
    doc.get_element_by_id("top-bar")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

fn measure_sections(doc: &Document) -> Vec<SectionBox> {
    NAV_LINKS
        .iter()
        .filter_map(|&(id, _)| {
            let el = doc.get_element_by_id(id)?;
            let rect = el.get_bounding_client_rect();
            Some(SectionBox { id, top: rect.top(), height: rect.height() })
        })
        .collect()
}

/// Sticky header with anchor links; highlights the section being read.
#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let active = use_state_eq(|| Some(NAV_LINKS[0].0));

    // Effect: track the active section while scrolling
    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let scroll_cb = Closure::wrap(Box::new(move |_: Event| {
                let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                active.set(active_section(&measure_sections(&doc), nav_height(&doc)));
            }) as Box<dyn FnMut(_)>);
            if let Some(win) = &window {
                win.add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref())
                    .ok();
            }
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        scroll_cb.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let links = NAV_LINKS.iter().map(|&(id, label)| {
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(win) = web_sys::window() else { return };
            let Some(doc) = win.document() else { return };
            let Some(target) = doc.get_element_by_id(id) else {
                log::warn!("nav target #{} not found", id);
                return;
            };
            let offset = win.page_y_offset().unwrap_or(0.0);
            let top = scroll_target(target.get_bounding_client_rect().top(), offset, nav_height(&doc));
            let opts = ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&opts);
        });
        let is_active = *active == Some(id);
        html! {
            <a href={format!("#{id}")} class={classes!(is_active.then_some("active"))} onclick={onclick}
                style={format!("text-decoration:none; padding:4px 8px; border-radius:4px; color:{}; font-weight:{};",
                    if is_active { "#6C5CE7" } else { "#374151" }, if is_active { 600 } else { 400 })}>
                { label }
            </a>
        }
    });

    html! {
        <nav class="nav-menu" style="display:flex; gap:6px;">
            { for links }
        </nav>
    }
}
