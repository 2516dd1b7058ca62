//! Schematic Bridge diagram derived from the connection store.

use crate::model::{ColorKind, ConnectionStore, ShapeKind};

pub const DIAGRAM_EMPTY: &str = "Create connections to see the UML diagram";

pub const VIEW_WIDTH: f64 = 800.0;
pub const MIN_VIEW_HEIGHT: f64 = 400.0;

const ROW_TOP: f64 = 200.0;
const ROW_PITCH: f64 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn center_x(&self) -> f64 {
        self.x + self.w / 2.0
    }
}

/// The two hierarchy headers joined by the labelled bridge.
pub const ABSTRACTION_BOX: Rect = Rect { x: 50.0, y: 50.0, w: 200.0, h: 100.0 };
pub const IMPLEMENTOR_BOX: Rect = Rect { x: 450.0, y: 50.0, w: 200.0, h: 100.0 };
pub const BRIDGE_LINK: ((f64, f64), (f64, f64)) = ((250.0, 100.0), (450.0, 100.0));

/// One shape box linked to one color box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagramRow {
    pub y: f64,
    pub shape: ShapeKind,
    pub color: ColorKind,
}

impl DiagramRow {
    pub fn shape_box(&self) -> Rect {
        Rect { x: 50.0, y: self.y, w: 150.0, h: 40.0 }
    }

    pub fn color_box(&self) -> Rect {
        Rect { x: 450.0, y: self.y, w: 150.0, h: 40.0 }
    }

    pub fn link(&self) -> ((f64, f64), (f64, f64)) {
        ((200.0, self.y + 20.0), (450.0, self.y + 20.0))
    }

    /// Baseline for the box labels.
    pub fn label_y(&self) -> f64 {
        self.y + 25.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Diagram {
    pub rows: Vec<DiagramRow>,
}

impl Diagram {
    /// `None` while nothing is connected; the view shows [`DIAGRAM_EMPTY`] instead.
    pub fn from_store(store: &ConnectionStore) -> Option<Diagram> {
        if store.is_empty() {
            return None;
        }
        let rows = store
            .iter()
            .enumerate()
            .map(|(i, c)| DiagramRow {
                y: ROW_TOP + i as f64 * ROW_PITCH,
                shape: c.shape,
                color: c.color,
            })
            .collect();
        Some(Diagram { rows })
    }

    pub fn view_height(&self) -> f64 {
        let bottom = self.rows.last().map(|r| r.y + ROW_PITCH).unwrap_or(0.0);
        bottom.max(MIN_VIEW_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CanvasSize, Playground};

    fn pg() -> Playground {
        Playground::new(CanvasSize { width: 600.0, height: 400.0 })
    }

    #[test]
    fn empty_store_has_no_diagram() {
        assert_eq!(Diagram::from_store(&ConnectionStore::default()), None);
    }

    #[test]
    fn reconnected_color_shows_single_row_with_new_shape() {
        let mut p = pg();
        p.connect(ShapeKind::Circle, ColorKind::Red, &mut || 0.5);
        p.connect(ShapeKind::Square, ColorKind::Red, &mut || 0.5);
        let d = Diagram::from_store(&p.store).expect("diagram");
        assert_eq!(d.rows.len(), 1);
        assert_eq!(d.rows[0].shape.name(), "Square");
        assert_eq!(d.rows[0].color.name(), "Red");
    }

    #[test]
    fn rows_follow_store_order_at_fixed_pitch() {
        let mut p = pg();
        p.connect(ShapeKind::Triangle, ColorKind::Blue, &mut || 0.1);
        p.connect(ShapeKind::Circle, ColorKind::Green, &mut || 0.9);
        let d = Diagram::from_store(&p.store).expect("diagram");
        assert_eq!(d.rows[0].y, 200.0);
        assert_eq!(d.rows[1].y, 260.0);
        assert_eq!(d.rows[1].link(), ((200.0, 280.0), (450.0, 280.0)));
        assert_eq!(d.view_height(), MIN_VIEW_HEIGHT);
    }

    #[test]
    fn reset_brings_back_placeholder() {
        let mut p = pg();
        p.connect(ShapeKind::Triangle, ColorKind::Blue, &mut || 0.3);
        p.connect(ShapeKind::Circle, ColorKind::Green, &mut || 0.3);
        p.reset();
        assert_eq!(Diagram::from_store(&p.store), None);
    }
}
