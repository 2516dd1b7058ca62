use crate::state::{CallLog, LOG_PLACEHOLDER};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CallLogPanelProps {
    pub log: CallLog,
}

#[function_component]
pub fn CallLogPanel(props: &CallLogPanelProps) -> Html {
    html! {<div id="call-log" style="display:flex; flex-direction:column; gap:6px; font-family:ui-monospace, monospace; font-size:12px;">
        <div style="font-weight:600; font-family:system-ui, sans-serif; font-size:14px;">{"Bridge calls"}</div>
        { if props.log.is_empty() {
            html!{ <div class="log-placeholder" style="opacity:0.7;">{ LOG_PLACEHOLDER }</div> }
        } else {
            html!{ <>{ for props.log.entries().map(|entry| html! {
                <div class="log-entry" style={format!("border:{}; border-radius:6px; padding:6px 8px;", entry.border())}>
                    <div class="log-call" style="font-weight:600;">{ entry.headline() }</div>
                    { for entry.details().into_iter().map(|line| html!{ <div class="log-result">{ line }</div> }) }
                </div>
            }) }</> }
        } }
    </div>}
}
