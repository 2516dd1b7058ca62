use crate::diagram::{
    ABSTRACTION_BOX, BRIDGE_LINK, DIAGRAM_EMPTY, Diagram, IMPLEMENTOR_BOX, Rect, VIEW_WIDTH,
};
use crate::model::ConnectionStore;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UmlDiagramProps {
    pub store: ConnectionStore,
}

fn rect(r: Rect, fill: &'static str, rx: &'static str) -> Html {
    html! { <rect x={r.x.to_string()} y={r.y.to_string()} width={r.w.to_string()} height={r.h.to_string()} fill={fill} stroke="white" stroke-width="2" rx={rx} /> }
}

fn label(x: f64, y: f64, text: &'static str, bold: bool) -> Html {
    html! { <text x={x.to_string()} y={y.to_string()} text-anchor="middle" fill="white" font-weight={bold.then_some("bold")}>{ text }</text> }
}

#[function_component]
pub fn UmlDiagram(props: &UmlDiagramProps) -> Html {
    let Some(diagram) = Diagram::from_store(&props.store) else {
        return html! { <div id="interactive-uml"><div class="empty-uml" style="padding:24px; text-align:center; opacity:0.7;"><p>{ DIAGRAM_EMPTY }</p></div></div> };
    };
    let ((bx1, by1), (bx2, by2)) = BRIDGE_LINK;
    html! {<div id="interactive-uml">
        <svg viewBox={format!("0 0 {} {}", VIEW_WIDTH, diagram.view_height())} style="width:100%; height:400px;">
            { rect(ABSTRACTION_BOX, "#6C5CE7", "8") }
            { label(ABSTRACTION_BOX.center_x(), 80.0, "Abstraction", true) }
            { label(ABSTRACTION_BOX.center_x(), 100.0, "Shape", false) }
            { rect(IMPLEMENTOR_BOX, "#00D084", "8") }
            { label(IMPLEMENTOR_BOX.center_x(), 80.0, "Implementor", true) }
            { label(IMPLEMENTOR_BOX.center_x(), 100.0, "Color", false) }
            <line x1={bx1.to_string()} y1={by1.to_string()} x2={bx2.to_string()} y2={by2.to_string()} stroke="#FF6B35" stroke-width="4" />
            <text x={((bx1 + bx2) / 2.0).to_string()} y={(by1 - 10.0).to_string()} text-anchor="middle" font-weight="bold" fill="#FF6B35">{"BRIDGE"}</text>
            { for diagram.rows.iter().map(|row| {
                let shape_box = row.shape_box();
                let color_box = row.color_box();
                let ((x1, y1), (x2, y2)) = row.link();
                html! { <g>
                    <rect x={shape_box.x.to_string()} y={shape_box.y.to_string()} width={shape_box.w.to_string()} height={shape_box.h.to_string()} fill="#8B5CF6" stroke="white" rx="4" />
                    { label(shape_box.center_x(), row.label_y(), row.shape.name(), false) }
                    <rect x={color_box.x.to_string()} y={color_box.y.to_string()} width={color_box.w.to_string()} height={color_box.h.to_string()} fill="#10B981" stroke="white" rx="4" />
                    { label(color_box.center_x(), row.label_y(), row.color.name(), false) }
                    <line x1={x1.to_string()} y1={y1.to_string()} x2={x2.to_string()} y2={y2.to_string()} stroke="#FF6B35" stroke-width="2" />
                </g> }
            }) }
        </svg>
    </div>}
}
