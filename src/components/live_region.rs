use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LiveRegionProps {
    pub message: String,
}

/// Visually hidden polite live region.
#[function_component(LiveRegion)]
pub fn live_region(props: &LiveRegionProps) -> Html {
    html! { <div aria-live="polite" aria-atomic="true" class="sr-only" style="position:absolute; width:1px; height:1px; padding:0; margin:-1px; overflow:hidden; clip:rect(0,0,0,0); border:0;">{ props.message.clone() }</div> }
}
