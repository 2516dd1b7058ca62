use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

use super::{
    concept_cards::ConceptCards, concept_modal::ConceptModal,
    explosion_counter::ExplosionCounter, live_region::LiveRegion, nav_bar::NavBar,
    playground_view::PlaygroundView, progress_tracker::ProgressTracker,
    shape_color_demo::ShapeColorDemo,
};
use crate::config;
use crate::content::{Concept, explosion_content};
use crate::model::{CanvasSize, Playground, PlaygroundAction};
use crate::shortcuts::Shortcut;
use crate::state::nav::{LOAD_ANNOUNCEMENT, skip_link_style};
use crate::state::{AnnounceAction, Announcement, ModalAction, ModalContent, ModalState, Step};
use crate::util::{focused_element, set_timeout};

// Screen-reader sink shared with every component that reports changes.
#[derive(Clone, PartialEq)]
pub struct AnnounceContext {
    pub announce: Callback<String>,
}

#[function_component(App)]
pub fn app() -> Html {
    let step = use_state(|| Step::Problem);
    let playground = use_reducer(|| {
        Playground::new(CanvasSize {
            width: config::PLAYGROUND_CANVAS_WIDTH as f64,
            height: config::PLAYGROUND_CANVAS_HEIGHT as f64,
        })
    });
    let modal = use_reducer(ModalState::default);
    let announcement = use_reducer(Announcement::default);
    let modal_opener = use_mut_ref(|| None::<HtmlElement>);
    let modal_showing = use_mut_ref(|| false);
    let skip_focused = use_state(|| false);

    let announce = {
        let announcement = announcement.clone();
        Callback::from(move |msg: String| announcement.dispatch(AnnounceAction::Say(msg)))
    };
    // Clear each announcement a second after it was made
    {
        let announcement_h = announcement.clone();
        let generation = announcement.generation;
        use_effect_with(generation, move |_| {
            if generation > 0 {
                set_timeout(config::ANNOUNCE_CLEAR_MS, move || {
                    announcement_h.dispatch(AnnounceAction::Expire { generation })
                });
            }
            || ()
        });
    }

    // Announce once the page has mounted
    {
        let announcement = announcement.clone();
        use_effect_with((), move |_| {
            announcement.dispatch(AnnounceAction::Say(LOAD_ANNOUNCEMENT.to_string()));
            || ()
        });
    }

    let open_modal = {
        let modal = modal.clone();
        let opener = modal_opener.clone();
        Callback::from(move |content: ModalContent| {
            *opener.borrow_mut() = focused_element();
            modal.dispatch(ModalAction::Open(content));
        })
    };
    let close_modal = {
        let modal = modal.clone();
        let opener = modal_opener.clone();
        Callback::from(move |_| {
            modal.dispatch(ModalAction::BeginClose);
            if let Some(el) = opener.borrow_mut().take() {
                let _ = el.focus();
            }
        })
    };
    // Remove the modal once its fade-out is over
    {
        let modal_h = modal.clone();
        let deps = (modal.is_closing(), modal.generation);
        use_effect_with(deps, move |&(closing, generation)| {
            if closing {
                set_timeout(config::MODAL_CLOSE_MS, move || {
                    modal_h.dispatch(ModalAction::Remove { generation })
                });
            }
            || ()
        });
    }
    // Shortcuts are suspended while a modal is up
    {
        let flag = modal.content().is_some();
        let modal_showing = modal_showing.clone();
        use_effect_with(flag, move |_| {
            *modal_showing.borrow_mut() = flag;
            || ()
        });
    }

    // Global keydown: steps 1-4, d/m/c for the playground
    {
        let step = step.clone();
        let playground = playground.clone();
        let modal_showing = modal_showing.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let keydown_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if *modal_showing.borrow() {
                    return;
                }
                let Some(shortcut) = Shortcut::from_key(&e.key(), e.ctrl_key(), e.meta_key())
                else {
                    return;
                };
                log::debug!("shortcut {:?}", shortcut);
                match shortcut {
                    Shortcut::ShowStep(s) => step.set(s),
                    Shortcut::DrawAll => playground.dispatch(PlaygroundAction::DrawAll),
                    Shortcut::MoveAll => playground.dispatch(PlaygroundAction::MoveAll),
                    Shortcut::Clear => playground.dispatch(PlaygroundAction::Reset),
                }
            }) as Box<dyn FnMut(_)>);
            match &window {
                Some(win) => {
                    win.add_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    )
                    .ok();
                }
                None => log::warn!("no window; keyboard shortcuts disabled"),
            }
            // Cleanup
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let select_step = {
        let step = step.clone();
        Callback::from(move |s: Step| step.set(s))
    };
    let open_concept = {
        let open_modal = open_modal.clone();
        let announce = announce.clone();
        Callback::from(move |concept: Concept| {
            let content = concept.content();
            announce.emit(format!("Details about {} are being displayed", content.title));
            open_modal.emit(content);
        })
    };
    let open_explosion = {
        let open_modal = open_modal.clone();
        Callback::from(move |_| open_modal.emit(explosion_content()))
    };

    let skip_focus = {
        let skip_focused = skip_focused.clone();
        Callback::from(move |_: FocusEvent| skip_focused.set(true))
    };
    let skip_blur = {
        let skip_focused = skip_focused.clone();
        Callback::from(move |_: FocusEvent| skip_focused.set(false))
    };

    let ctx = AnnounceContext { announce };
    let current = *step;
    let section_style = |s: Step| {
        if s == current {
            "display:block; padding:16px 0;"
        } else {
            "display:none;"
        }
    };

    html! { <ContextProvider<AnnounceContext> context={ctx}>
        <div id="root" style="font-family:system-ui, sans-serif; color:#1f2937; max-width:1100px; margin:0 auto; padding:0 16px;">
            <a href="#main-content" class={classes!("skip-link", (!*skip_focused).then_some("sr-only"))}
                onfocus={skip_focus} onblur={skip_blur} style={skip_link_style(*skip_focused)}>{"Skip to main content"}</a>
            <header id="top-bar" class="navbar" style="position:sticky; top:0; z-index:100; background:#fff; display:flex; justify-content:space-between; align-items:center; gap:12px; padding:12px 0; border-bottom:1px solid #e5e7eb;">
                <h1 style="margin:0; font-size:22px;">{"🌉 Bridge Pattern: Shapes & Colors"}</h1>
                <NavBar />
                <span style="font-size:12px; opacity:0.7;">{"Keys: 1-4 steps · D draw · M move · C clear"}</span>
            </header>
            <main id="main-content">
                <section id="home" style="padding:16px 0;">
                    <p style="margin:0 0 12px 0;">{"Pick any shape and any color: the shape draws itself, the color supplies the style. Neither needs to know the other's concrete type."}</p>
                    <ShapeColorDemo />
                </section>
                <section id="learning" style="padding:8px 0;">
                    <ProgressTracker current={current} on_select={select_step} />
                    <section id={Step::Problem.section_id()} class={classes!("learning-step", (current == Step::Problem).then_some("active"))} style={section_style(Step::Problem)}>
                        <h2>{"1. The Problem"}</h2>
                        <p>{"Give every shape/color combination its own type and the type count multiplies with every new shape or color."}</p>
                        <ExplosionCounter on_open={open_explosion} />
                    </section>
                    <section id={Step::Solution.section_id()} class={classes!("learning-step", (current == Step::Solution).then_some("active"))} style={section_style(Step::Solution)}>
                        <h2>{"2. The Solution"}</h2>
                        <p>{"Split the hierarchy in two and bridge them with a reference: shapes hold a color and delegate styling to it."}</p>
                        <ConceptCards on_open={open_concept} />
                    </section>
                    <section id={Step::Playground.section_id()} class={classes!("learning-step", (current == Step::Playground).then_some("active"))} style={section_style(Step::Playground)}>
                        <h2>{"3. Playground"}</h2>
                        <PlaygroundView playground={playground.clone()} />
                    </section>
                    <section id={Step::DrawMethod.section_id()} class={classes!("learning-step", (current == Step::DrawMethod).then_some("active"))} style={section_style(Step::DrawMethod)}>
                        <h2>{"4. The draw() Method"}</h2>
                        <p>{"Drawing is where the bridge is crossed: the shape produces its outline and asks its color for fill and stroke."}</p>
                        <pre style="background:#111827; color:#fff; padding:12px; border-radius:6px; overflow-x:auto; font-size:13px;"><code>{DRAW_METHOD_CODE}</code></pre>
                    </section>
                </section>
            </main>
            <ConceptModal state={(*modal).clone()} on_close={close_modal} />
            <LiveRegion message={announcement.message.clone()} />
        </div>
    </ContextProvider<AnnounceContext>> }
}

const DRAW_METHOD_CODE: &str = r#"for conn in store.iter() {
    surface.translate(conn.position.x, conn.position.y);
    // abstraction: the shape decides the outline
    let outline = conn.shape.outline((0.0, 0.0), 30.0);
    // implementor: the color decides how it is painted
    surface.draw_outline(&outline, conn.color.fill(), conn.color.stroke(), 3.0);
    surface.restore();
}"#;
