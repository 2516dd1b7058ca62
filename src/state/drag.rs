// Drag-and-drop translation between DOM payloads and playground connections.
use std::collections::HashSet;
use std::rc::Rc;

use yew::Reducible;

use crate::error::InputError;
use crate::model::{ColorKind, ShapeKind, parse_pair};

/// Data transfer format carrying the dragged shape identifier.
pub const DRAG_FORMAT: &str = "text/plain";

/// Turns a raw drop (dragged payload + the zone's `data-color`) into a connection
/// request. Empty strings count as missing.
pub fn drop_request(
    shape: Option<&str>,
    color: Option<&str>,
) -> Result<(ShapeKind, ColorKind), InputError> {
    let shape = shape
        .filter(|s| !s.is_empty())
        .ok_or(InputError::MissingDropData("shape"))?;
    let color = color
        .filter(|s| !s.is_empty())
        .ok_or(InputError::MissingDropData("color"))?;
    parse_pair(shape, color)
}

/// Client rectangle of a drop zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

impl From<web_sys::DomRect> for Bounds {
    fn from(r: web_sys::DomRect) -> Self {
        Bounds { left: r.left(), top: r.top(), right: r.right(), bottom: r.bottom() }
    }
}

/// Drop zones currently showing the drag-over highlight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DropHighlight {
    zones: HashSet<ColorKind>,
}

impl DropHighlight {
    pub fn enter(&mut self, color: ColorKind) {
        self.zones.insert(color);
    }

    /// `dragleave` also fires when crossing into child elements; only drop the
    /// highlight once the pointer is really outside the zone.
    pub fn leave(&mut self, color: ColorKind, zone: Bounds, x: f64, y: f64) {
        if !zone.contains(x, y) {
            self.zones.remove(&color);
        }
    }

    pub fn release(&mut self, color: ColorKind) {
        self.zones.remove(&color);
    }

    pub fn clear(&mut self) {
        self.zones.clear();
    }

    pub fn is_lit(&self, color: ColorKind) -> bool {
        self.zones.contains(&color)
    }
}

#[derive(Clone, Copy, Debug)]
pub enum HighlightAction {
    Enter(ColorKind),
    Leave { color: ColorKind, zone: Bounds, x: f64, y: f64 },
    Release(ColorKind),
    Clear,
}

impl Reducible for DropHighlight {
    type Action = HighlightAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            HighlightAction::Enter(color) => next.enter(color),
            HighlightAction::Leave { color, zone, x, y } => next.leave(color, zone, x, y),
            HighlightAction::Release(color) => next.release(color),
            HighlightAction::Clear => next.clear(),
        }
        if next == *self { self } else { Rc::new(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZONE: Bounds = Bounds { left: 10.0, top: 10.0, right: 110.0, bottom: 60.0 };

    #[test]
    fn well_formed_drop_becomes_connection() {
        assert_eq!(
            drop_request(Some("triangle"), Some("green")),
            Ok((ShapeKind::Triangle, ColorKind::Green))
        );
    }

    #[test]
    fn malformed_drops_are_rejected() {
        assert_eq!(drop_request(None, Some("red")), Err(InputError::MissingDropData("shape")));
        assert_eq!(drop_request(Some(""), Some("red")), Err(InputError::MissingDropData("shape")));
        assert_eq!(drop_request(Some("circle"), None), Err(InputError::MissingDropData("color")));
        assert_eq!(
            drop_request(Some("file.png"), Some("red")),
            Err(InputError::UnknownShape("file.png".into()))
        );
    }

    #[test]
    fn leave_inside_zone_keeps_highlight() {
        let mut h = DropHighlight::default();
        h.enter(ColorKind::Blue);
        h.leave(ColorKind::Blue, ZONE, 50.0, 30.0);
        assert!(h.is_lit(ColorKind::Blue));
        // right/bottom edges are exclusive
        h.leave(ColorKind::Blue, ZONE, 110.0, 30.0);
        assert!(!h.is_lit(ColorKind::Blue));
    }

    #[test]
    fn clear_drops_every_highlight() {
        let mut h = DropHighlight::default();
        for c in ColorKind::ALL {
            h.enter(c);
        }
        h.release(ColorKind::Red);
        assert!(!h.is_lit(ColorKind::Red));
        h.clear();
        assert!(ColorKind::ALL.iter().all(|c| !h.is_lit(*c)));
    }

    #[test]
    fn back_to_back_actions_all_apply() {
        let h = Rc::new(DropHighlight::default())
            .reduce(HighlightAction::Enter(ColorKind::Red))
            .reduce(HighlightAction::Enter(ColorKind::Green));
        assert!(h.is_lit(ColorKind::Red) && h.is_lit(ColorKind::Green));

        let h = h.reduce(HighlightAction::Leave { color: ColorKind::Red, zone: ZONE, x: 0.0, y: 0.0 });
        assert!(!h.is_lit(ColorKind::Red));
        assert!(h.is_lit(ColorKind::Green));

        let h = h.reduce(HighlightAction::Clear);
        assert_eq!(*h, DropHighlight::default());
    }

    #[test]
    fn no_op_action_keeps_the_same_state() {
        let h = Rc::new(DropHighlight::default());
        let same = h.clone().reduce(HighlightAction::Release(ColorKind::Blue));
        assert!(Rc::ptr_eq(&h, &same));
    }
}
