//! Canvas rendering for the selector demo and the playground.
//!
//! Renderers are plain functions of the current selection or store, drawn through the
//! [`Surface`] trait so they run the same against a browser canvas or a recorder.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config;
use crate::error::InputError;
use crate::model::{ColorKind, ConnectionStore, ShapeKind};

pub type Point = (f64, f64);

/// Closed outline produced by a shape, in surface coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    Circle { center: Point, radius: f64 },
    Polygon(Vec<Point>),
}

/// Drawing capability the renderers need.
pub trait Surface {
    fn size(&self) -> (f64, f64);
    fn clear(&mut self);
    fn stroke_line(&mut self, from: Point, to: Point, style: &str, width: f64);
    fn draw_outline(&mut self, outline: &Outline, fill: &str, stroke: &str, width: f64);
    /// Saves the current origin and moves it by `(x, y)`.
    fn translate(&mut self, x: f64, y: f64);
    /// Restores the origin saved by the matching [`Surface::translate`].
    fn restore(&mut self);
}

impl ShapeKind {
    /// Outline centered on `center`; `half` is the radius or half the side length.
    pub fn outline(self, center: Point, half: f64) -> Outline {
        let (cx, cy) = center;
        match self {
            ShapeKind::Circle => Outline::Circle { center, radius: half },
            ShapeKind::Square => Outline::Polygon(vec![
                (cx - half, cy - half),
                (cx + half, cy - half),
                (cx + half, cy + half),
                (cx - half, cy + half),
            ]),
            ShapeKind::Triangle => Outline::Polygon(vec![
                (cx, cy - half),
                (cx - half, cy + half),
                (cx + half, cy + half),
            ]),
        }
    }

    /// Size used by the selector demo.
    pub fn demo_half_extent(self) -> f64 {
        match self {
            ShapeKind::Circle | ShapeKind::Square => 60.0,
            ShapeKind::Triangle => 70.0,
        }
    }
}

/// Background grid. `inclusive` also draws the line sitting on the far edge.
pub fn draw_grid(s: &mut dyn Surface, pitch: f64, inclusive: bool, style: &str) {
    let (w, h) = s.size();
    let within = |v: f64, limit: f64| if inclusive { v <= limit } else { v < limit };
    let mut x = 0.0;
    while within(x, w) {
        s.stroke_line((x, 0.0), (x, h), style, config::GRID_LINE_WIDTH);
        x += pitch;
    }
    let mut y = 0.0;
    while within(y, h) {
        s.stroke_line((0.0, y), (w, y), style, config::GRID_LINE_WIDTH);
        y += pitch;
    }
}

/// Selector demo: grid plus one centered shape.
pub fn render_demo(s: &mut dyn Surface, shape: ShapeKind, color: ColorKind) {
    s.clear();
    draw_grid(s, config::DEMO_GRID_PITCH, true, config::DEMO_GRID_STYLE);
    let (w, h) = s.size();
    let outline = shape.outline((w / 2.0, h / 2.0), shape.demo_half_extent());
    s.draw_outline(
        &outline,
        color.demo_fill(),
        config::DEMO_STROKE_STYLE,
        config::SHAPE_LINE_WIDTH,
    );
}

/// Playground: grid plus every connection in store order, later ones on top.
pub fn render_playground(s: &mut dyn Surface, store: &ConnectionStore) {
    s.clear();
    draw_grid(s, config::PLAYGROUND_GRID_PITCH, false, config::PLAYGROUND_GRID_STYLE);
    for conn in store.iter() {
        s.translate(conn.position.x, conn.position.y);
        let outline = conn.shape.outline((0.0, 0.0), config::PLAYGROUND_SHAPE_SIZE);
        s.draw_outline(
            &outline,
            conn.color.fill(),
            conn.color.stroke(),
            config::SHAPE_LINE_WIDTH,
        );
        s.restore();
    }
}

/// [`Surface`] over a 2D canvas context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, InputError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(InputError::MissingElement("2d context"))?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: &str, width: f64) {
        self.ctx.set_stroke_style_str(style);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
    }

    fn draw_outline(&mut self, outline: &Outline, fill: &str, stroke: &str, width: f64) {
        let ctx = &self.ctx;
        ctx.begin_path();
        match outline {
            Outline::Circle { center, radius } => {
                ctx.arc(center.0, center.1, *radius, 0.0, std::f64::consts::PI * 2.0)
                    .ok();
            }
            Outline::Polygon(points) => {
                let mut it = points.iter();
                if let Some(&(x, y)) = it.next() {
                    ctx.move_to(x, y);
                }
                for &(x, y) in it {
                    ctx.line_to(x, y);
                }
                ctx.close_path();
            }
        }
        ctx.set_fill_style_str(fill);
        ctx.fill();
        ctx.set_stroke_style_str(stroke);
        ctx.set_line_width(width);
        ctx.stroke();
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.ctx.save();
        self.ctx.translate(x, y).ok();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}

/// Paints `canvas` with `paint`, logging instead of failing when no 2D context exists.
pub fn paint_canvas(canvas: &HtmlCanvasElement, paint: impl FnOnce(&mut dyn Surface)) {
    match CanvasSurface::from_canvas(canvas) {
        Ok(mut surface) => paint(&mut surface),
        Err(e) => log::warn!("skipping render: {}", e),
    }
}

#[cfg(test)]
pub(crate) mod recorder {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Op {
        Clear,
        Line { from: Point, to: Point, style: String },
        Shape { outline: Outline, fill: String, stroke: String, width: f64, origin: Point },
        Translate(f64, f64),
        Restore,
    }

    /// Records every call; tracks the origin so shape placement can be asserted.
    pub struct Recorder {
        pub size: (f64, f64),
        pub ops: Vec<Op>,
        origins: Vec<Point>,
    }

    impl Recorder {
        pub fn new(w: f64, h: f64) -> Self {
            Self { size: (w, h), ops: Vec::new(), origins: vec![(0.0, 0.0)] }
        }

        pub fn shapes(&self) -> Vec<&Op> {
            self.ops.iter().filter(|op| matches!(op, Op::Shape { .. })).collect()
        }

        pub fn lines(&self) -> usize {
            self.ops.iter().filter(|op| matches!(op, Op::Line { .. })).count()
        }
    }

    impl Surface for Recorder {
        fn size(&self) -> (f64, f64) {
            self.size
        }
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn stroke_line(&mut self, from: Point, to: Point, style: &str, _width: f64) {
            self.ops.push(Op::Line { from, to, style: style.to_string() });
        }
        fn draw_outline(&mut self, outline: &Outline, fill: &str, stroke: &str, width: f64) {
            let origin = *self.origins.last().unwrap_or(&(0.0, 0.0));
            self.ops.push(Op::Shape {
                outline: outline.clone(),
                fill: fill.to_string(),
                stroke: stroke.to_string(),
                width,
                origin,
            });
        }
        fn translate(&mut self, x: f64, y: f64) {
            let (ox, oy) = *self.origins.last().unwrap_or(&(0.0, 0.0));
            self.origins.push((ox + x, oy + y));
            self.ops.push(Op::Translate(x, y));
        }
        fn restore(&mut self) {
            if self.origins.len() > 1 {
                self.origins.pop();
            }
            self.ops.push(Op::Restore);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recorder::{Op, Recorder};
    use super::*;
    use crate::model::{Connection, Position};

    #[test]
    fn demo_draws_grid_then_single_centered_shape() {
        let mut r = Recorder::new(300.0, 300.0);
        render_demo(&mut r, ShapeKind::Circle, ColorKind::Blue);
        assert_eq!(r.ops[0], Op::Clear);
        // 0..=300 step 20 in each direction
        assert_eq!(r.lines(), 16 * 2);
        let shapes = r.shapes();
        assert_eq!(shapes.len(), 1);
        assert_eq!(
            *shapes[0],
            Op::Shape {
                outline: Outline::Circle { center: (150.0, 150.0), radius: 60.0 },
                fill: "#3b82f6".into(),
                stroke: "#374151".into(),
                width: 3.0,
                origin: (0.0, 0.0),
            }
        );
        assert!(matches!(r.ops.last(), Some(Op::Shape { .. })));
    }

    #[test]
    fn demo_square_is_120_wide() {
        let mut r = Recorder::new(300.0, 300.0);
        render_demo(&mut r, ShapeKind::Square, ColorKind::Red);
        let shapes = r.shapes();
        let Op::Shape { outline: Outline::Polygon(pts), .. } = shapes[0] else {
            panic!("square should be a polygon");
        };
        assert_eq!(pts[0], (90.0, 90.0));
        assert_eq!(pts[2], (210.0, 210.0));
    }

    #[test]
    fn playground_grid_excludes_far_edge() {
        let mut r = Recorder::new(600.0, 400.0);
        render_playground(&mut r, &ConnectionStore::default());
        assert_eq!(r.lines(), 15 + 10);
        assert!(r.shapes().is_empty());
    }

    #[test]
    fn playground_draws_each_connection_at_its_position_in_store_order() {
        let mut store = ConnectionStore::default();
        store.insert(Connection {
            shape: ShapeKind::Triangle,
            color: ColorKind::Green,
            position: Position { x: 100.0, y: 120.0 },
        });
        store.insert(Connection {
            shape: ShapeKind::Square,
            color: ColorKind::Red,
            position: Position { x: 400.0, y: 300.0 },
        });
        let mut r = Recorder::new(600.0, 400.0);
        render_playground(&mut r, &store);

        let shapes = r.shapes();
        assert_eq!(shapes.len(), 2);
        match shapes[0] {
            Op::Shape { outline, fill, stroke, origin, .. } => {
                assert_eq!(*origin, (100.0, 120.0));
                assert_eq!(fill, "#00D084");
                assert_eq!(stroke, "#00a865");
                assert_eq!(
                    *outline,
                    Outline::Polygon(vec![(0.0, -30.0), (-30.0, 30.0), (30.0, 30.0)])
                );
            }
            _ => unreachable!(),
        }
        match shapes[1] {
            Op::Shape { fill, origin, .. } => {
                assert_eq!(*origin, (400.0, 300.0));
                assert_eq!(fill, "#FF4757");
            }
            _ => unreachable!(),
        }
        let translates = r.ops.iter().filter(|o| matches!(o, Op::Translate(..))).count();
        let restores = r.ops.iter().filter(|o| matches!(o, Op::Restore)).count();
        assert_eq!(translates, restores);
    }
}
