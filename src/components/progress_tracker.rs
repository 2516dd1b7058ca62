use crate::state::{Step, StepStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressTrackerProps {
    pub current: Step,
    pub on_select: Callback<Step>,
}

#[function_component]
pub fn ProgressTracker(props: &ProgressTrackerProps) -> Html {
    html! {<nav aria-label="Learning progress" style="display:flex; gap:8px; flex-wrap:wrap; margin:8px 0;">
        { for Step::ALL.iter().map(|&s| {
            let status = s.status(props.current);
            let (class, style) = match status {
                StepStatus::Completed => ("completed", "background:#d1fae5; border:1px solid #10b981; color:#065f46;"),
                StepStatus::Active => ("active", "background:#6C5CE7; border:1px solid #4c3fd1; color:#fff; font-weight:600;"),
                StepStatus::Pending => ("pending", "background:#f3f4f6; border:1px solid #d1d5db; color:#6b7280;"),
            };
            let cb = {
                let cb = props.on_select.clone();
                Callback::from(move |_| cb.emit(s))
            };
            html! {
                <button
                    class={classes!("progress-step", class)}
                    aria-current={(status == StepStatus::Active).then_some("step")}
                    onclick={cb}
                    style={format!("padding:6px 12px; border-radius:16px; cursor:pointer; {}", style)}
                >
                    { format!("{}. {}", s.number(), s.title()) }
                </button>
            }
        }) }
    </nav>}
}
