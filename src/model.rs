//! Core data models for the Bridge playground.
//! Shapes form the abstraction side, colors the implementor side; a connection
//! bridges one of each and carries where it is drawn on the playground canvas.

use serde::Serialize;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use yew::Reducible;

use crate::config;
use crate::error::InputError;
use crate::state::CallLog;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];

    /// Identifier used in `data-shape` attributes and drag payloads.
    pub fn id(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ShapeKind::Circle => "⭕",
            ShapeKind::Square => "⬜",
            ShapeKind::Triangle => "🔺",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.id() == s)
            .ok_or_else(|| InputError::UnknownShape(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKind {
    Red,
    Blue,
    Green,
}

impl ColorKind {
    pub const ALL: [ColorKind; 3] = [ColorKind::Red, ColorKind::Blue, ColorKind::Green];

    /// Identifier used in `data-color` attributes and dropdown values.
    pub fn id(self) -> &'static str {
        match self {
            ColorKind::Red => "red",
            ColorKind::Blue => "blue",
            ColorKind::Green => "green",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorKind::Red => "Red",
            ColorKind::Blue => "Blue",
            ColorKind::Green => "Green",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ColorKind::Red => "🔴",
            ColorKind::Blue => "🔵",
            ColorKind::Green => "🟢",
        }
    }

    /// Playground fill.
    pub fn fill(self) -> &'static str {
        match self {
            ColorKind::Red => "#FF4757",
            ColorKind::Blue => "#4ECDC4",
            ColorKind::Green => "#00D084",
        }
    }

    /// Playground stroke.
    pub fn stroke(self) -> &'static str {
        match self {
            ColorKind::Red => "#c44569",
            ColorKind::Blue => "#26d0ce",
            ColorKind::Green => "#00a865",
        }
    }

    /// Fill used by the selector demo, which strokes every shape the same way.
    pub fn demo_fill(self) -> &'static str {
        match self {
            ColorKind::Red => "#ef4444",
            ColorKind::Blue => "#3b82f6",
            ColorKind::Green => "#10b981",
        }
    }
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorKind::ALL
            .into_iter()
            .find(|k| k.id() == s)
            .ok_or_else(|| InputError::UnknownColor(s.to_string()))
    }
}

/// Parses a (shape, color) identifier pair coming from the DOM.
pub fn parse_pair(shape: &str, color: &str) -> Result<(ShapeKind, ColorKind), InputError> {
    Ok((shape.parse()?, color.parse()?))
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Uniform point inside `size` keeping `margin` free on every edge.
    /// `rand` yields samples in `[0, 1)`.
    pub fn random_within(size: CanvasSize, margin: f64, rand: &mut dyn FnMut() -> f64) -> Self {
        let x = rand() * (size.width - 2.0 * margin) + margin;
        let y = rand() * (size.height - 2.0 * margin) + margin;
        Position { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Connection {
    pub shape: ShapeKind,
    pub color: ColorKind,
    pub position: Position,
}

/// Live connections keyed by color, in insertion order.
///
/// Replacing the connection of an already bound color keeps its slot, so the draw
/// order (and with it the z-order on the canvas) only changes when a new color joins.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConnectionStore {
    entries: Vec<Connection>,
}

impl ConnectionStore {
    /// Inserts `conn`, returning the connection it displaced for the same color.
    pub fn insert(&mut self, conn: Connection) -> Option<Connection> {
        match self.entries.iter_mut().find(|c| c.color == conn.color) {
            Some(slot) => Some(std::mem::replace(slot, conn)),
            None => {
                self.entries.push(conn);
                None
            }
        }
    }

    pub fn get(&self, color: ColorKind) -> Option<&Connection> {
        self.entries.iter().find(|c| c.color == color)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Connection> {
        self.entries.iter_mut()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// JSON dump for debug logging.
    pub fn snapshot(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable: {e}>"))
    }
}

/// Views derived from the playground state. The components repaint from their own
/// version counters and props; this only records which views an operation touched,
/// in paint order, for the debug log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderTarget {
    Canvas,
    Log,
    Diagram,
}

// ---------------- Playground controller -----------------

#[derive(Clone, Debug, PartialEq)]
pub struct Playground {
    pub canvas: CanvasSize,
    pub store: ConnectionStore,
    pub log: CallLog,
    /// Bumped whenever the canvas has to be repainted.
    pub canvas_version: u64,
    /// Bumped on every draw-all so the view can pulse the canvas.
    pub pulse_version: u64,
    /// Views refreshed by the last applied operation, in paint order. Bookkeeping only.
    pub last_renders: Vec<RenderTarget>,
}

impl Playground {
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            store: ConnectionStore::default(),
            log: CallLog::default(),
            canvas_version: 0,
            pulse_version: 0,
            last_renders: Vec::new(),
        }
    }

    /// Action buttons are only live while something is connected.
    pub fn actions_enabled(&self) -> bool {
        !self.store.is_empty()
    }

    /// Binds `shape` to `color` at a fresh random position, replacing whatever shape
    /// the color was bound to before.
    pub fn connect(&mut self, shape: ShapeKind, color: ColorKind, rand: &mut dyn FnMut() -> f64) {
        let position = Position::random_within(self.canvas, config::PLACEMENT_MARGIN, rand);
        if let Some(prev) = self.store.insert(Connection { shape, color, position }) {
            log::debug!("{} replaces {} on {}", shape, prev.shape, color);
        }
        self.log.record_delegation(shape, color);
        self.rendered(&[RenderTarget::Canvas, RenderTarget::Log, RenderTarget::Diagram]);
        log::info!("Bridge connection created: {} ↔ {}", shape, color);
    }

    /// Repaints everything in place and logs a summary. Returns false when there is
    /// nothing to draw.
    pub fn redraw_all(&mut self) -> bool {
        if self.store.is_empty() {
            log::info!("No connections available");
            return false;
        }
        self.log.record_summary(self.store.len());
        self.pulse_version += 1;
        self.rendered(&[RenderTarget::Canvas, RenderTarget::Log, RenderTarget::Diagram]);
        log::info!("All shapes redrawn with Bridge delegation");
        true
    }

    /// Scatters every connection to a new random position. Pairings are untouched.
    pub fn move_all(&mut self, rand: &mut dyn FnMut() -> f64) {
        let size = self.canvas;
        for conn in self.store.iter_mut() {
            conn.position = Position::random_within(size, config::PLACEMENT_MARGIN, rand);
        }
        self.rendered(&[RenderTarget::Canvas, RenderTarget::Diagram]);
        log::info!("All shapes moved");
    }

    pub fn reset(&mut self) {
        self.store.clear();
        self.log.clear();
        self.rendered(&[RenderTarget::Canvas, RenderTarget::Log, RenderTarget::Diagram]);
        log::info!("Playground was reset");
    }

    fn rendered(&mut self, targets: &[RenderTarget]) {
        if targets.contains(&RenderTarget::Canvas) {
            self.canvas_version += 1;
        }
        self.last_renders = targets.to_vec();
        log::debug!("rendered {:?}, store: {}", self.last_renders, self.store.snapshot());
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum PlaygroundAction {
    Connect { shape: ShapeKind, color: ColorKind },
    DrawAll,
    MoveAll,
    Reset,
}

impl Reducible for Playground {
    type Action = PlaygroundAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use PlaygroundAction::*;
        let mut new = (*self).clone();
        let mut rand = crate::util::random_unit;
        match action {
            Connect { shape, color } => new.connect(shape, color, &mut rand),
            DrawAll => {
                if !new.redraw_all() {
                    return self;
                }
            }
            MoveAll => new.move_all(&mut rand),
            Reset => new.reset(),
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size() -> CanvasSize {
        CanvasSize { width: 600.0, height: 400.0 }
    }

    /// Cycles through the given samples forever.
    fn seq(samples: &[f64]) -> impl FnMut() -> f64 {
        let samples = samples.to_vec();
        let mut i = 0;
        move || {
            let v = samples[i % samples.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn identifiers_parse_back_to_their_kind() {
        for s in ShapeKind::ALL {
            assert_eq!(s.id().parse::<ShapeKind>(), Ok(s));
        }
        for c in ColorKind::ALL {
            assert_eq!(c.id().parse::<ColorKind>(), Ok(c));
        }
        assert_eq!(
            "hexagon".parse::<ShapeKind>(),
            Err(InputError::UnknownShape("hexagon".into()))
        );
        assert_eq!("Red".parse::<ColorKind>(), Err(InputError::UnknownColor("Red".into())));
        assert!(parse_pair("circle", "purple").is_err());
    }

    #[test]
    fn random_position_respects_margin() {
        let lo = Position::random_within(size(), 50.0, &mut || 0.0);
        assert_eq!(lo, Position { x: 50.0, y: 50.0 });
        let hi = Position::random_within(size(), 50.0, &mut || 0.999_999);
        assert!(hi.x < 550.0 && hi.y < 350.0);
        assert!(hi.x > 549.0 && hi.y > 349.0);
    }

    #[test]
    fn connect_populates_all_three_views() {
        let mut pg = Playground::new(size());
        pg.connect(ShapeKind::Triangle, ColorKind::Blue, &mut seq(&[0.5]));
        assert_eq!(pg.store.len(), 1);
        let c = pg.store.get(ColorKind::Blue).unwrap();
        assert_eq!(c.shape, ShapeKind::Triangle);
        assert_eq!(c.position, Position { x: 300.0, y: 200.0 });
        assert_eq!(pg.log.len(), 1);
        assert_eq!(
            pg.last_renders,
            vec![RenderTarget::Canvas, RenderTarget::Log, RenderTarget::Diagram]
        );
        assert_eq!(pg.canvas_version, 1);
        assert!(pg.actions_enabled());
    }

    #[test]
    fn every_pair_shows_up_once_on_canvas_log_and_diagram() {
        use crate::diagram::Diagram;
        use crate::draw::recorder::{Op, Recorder};
        use crate::draw::render_playground;
        use crate::state::LogEntry;

        for shape in ShapeKind::ALL {
            for color in ColorKind::ALL {
                let mut pg = Playground::new(size());
                pg.connect(shape, color, &mut seq(&[0.5]));

                let mut r = Recorder::new(600.0, 400.0);
                render_playground(&mut r, &pg.store);
                let shapes = r.shapes();
                assert_eq!(shapes.len(), 1, "{shape}/{color}");
                let Op::Shape { outline, fill, stroke, .. } = shapes[0] else {
                    panic!("expected a shape op");
                };
                assert_eq!(*outline, shape.outline((0.0, 0.0), config::PLAYGROUND_SHAPE_SIZE));
                assert_eq!(fill, color.fill());
                assert_eq!(stroke, color.stroke());

                let diagram = Diagram::from_store(&pg.store).expect("one row");
                assert_eq!(diagram.rows.len(), 1);
                assert_eq!((diagram.rows[0].shape, diagram.rows[0].color), (shape, color));

                assert_eq!(
                    pg.log.entries().next(),
                    Some(&LogEntry::Delegation { shape, color })
                );
            }
        }
    }

    #[test]
    fn reconnecting_a_color_replaces_its_shape_in_place() {
        let mut pg = Playground::new(size());
        let mut rand = seq(&[0.1, 0.2, 0.3]);
        pg.connect(ShapeKind::Circle, ColorKind::Red, &mut rand);
        pg.connect(ShapeKind::Circle, ColorKind::Green, &mut rand);
        pg.connect(ShapeKind::Square, ColorKind::Red, &mut rand);
        assert_eq!(pg.store.len(), 2);
        let order: Vec<_> = pg.store.iter().map(|c| (c.color, c.shape)).collect();
        assert_eq!(
            order,
            vec![
                (ColorKind::Red, ShapeKind::Square),
                (ColorKind::Green, ShapeKind::Circle)
            ]
        );
    }

    #[test]
    fn same_shape_may_bind_several_colors() {
        let mut pg = Playground::new(size());
        let mut rand = seq(&[0.4]);
        for c in ColorKind::ALL {
            pg.connect(ShapeKind::Circle, c, &mut rand);
        }
        pg.connect(ShapeKind::Triangle, ColorKind::Blue, &mut rand);
        assert_eq!(pg.store.len(), ColorKind::ALL.len());
    }

    #[test]
    fn redraw_all_on_empty_store_changes_nothing() {
        let mut pg = Playground::new(size());
        let before = pg.clone();
        assert!(!pg.redraw_all());
        assert_eq!(pg, before);
    }

    #[test]
    fn redraw_all_keeps_positions_and_logs_summary() {
        let mut pg = Playground::new(size());
        pg.connect(ShapeKind::Square, ColorKind::Green, &mut seq(&[0.25, 0.75]));
        let positions: Vec<_> = pg.store.iter().map(|c| c.position).collect();
        assert!(pg.redraw_all());
        let after: Vec<_> = pg.store.iter().map(|c| c.position).collect();
        assert_eq!(positions, after);
        assert_eq!(pg.log.len(), 2);
        assert_eq!(pg.pulse_version, 1);
        assert_eq!(pg.canvas_version, 2);
    }

    #[test]
    fn move_all_changes_positions_but_not_pairings() {
        let mut pg = Playground::new(size());
        pg.connect(ShapeKind::Circle, ColorKind::Red, &mut seq(&[0.1]));
        pg.connect(ShapeKind::Triangle, ColorKind::Blue, &mut seq(&[0.2]));
        let log_before = pg.log.clone();
        let pairs: Vec<_> = pg.store.iter().map(|c| (c.shape, c.color)).collect();
        let positions: Vec<_> = pg.store.iter().map(|c| c.position).collect();

        pg.move_all(&mut seq(&[0.9, 0.8, 0.7, 0.6]));

        let pairs_after: Vec<_> = pg.store.iter().map(|c| (c.shape, c.color)).collect();
        assert_eq!(pairs, pairs_after);
        for (old, new) in positions.iter().zip(pg.store.iter()) {
            assert_ne!(*old, new.position);
        }
        assert_eq!(pg.log, log_before);
        assert_eq!(pg.last_renders, vec![RenderTarget::Canvas, RenderTarget::Diagram]);
    }

    #[test]
    fn move_all_on_empty_store_only_repaints() {
        let mut pg = Playground::new(size());
        pg.move_all(&mut seq(&[0.5]));
        assert!(pg.store.is_empty());
        assert!(pg.log.is_empty());
        assert!(!pg.actions_enabled());
    }

    #[test]
    fn reset_clears_everything() {
        let mut pg = Playground::new(size());
        let mut rand = seq(&[0.3]);
        pg.connect(ShapeKind::Triangle, ColorKind::Blue, &mut rand);
        pg.connect(ShapeKind::Circle, ColorKind::Green, &mut rand);
        pg.reset();
        assert!(pg.store.is_empty());
        assert!(pg.log.is_empty());
        assert!(!pg.actions_enabled());
        assert_eq!(
            pg.last_renders,
            vec![RenderTarget::Canvas, RenderTarget::Log, RenderTarget::Diagram]
        );
    }

    #[test]
    fn snapshot_uses_dom_identifiers() {
        let mut store = ConnectionStore::default();
        store.insert(Connection {
            shape: ShapeKind::Square,
            color: ColorKind::Red,
            position: Position { x: 1.0, y: 2.0 },
        });
        assert_eq!(
            store.snapshot(),
            r#"[{"shape":"square","color":"red","position":{"x":1.0,"y":2.0}}]"#
        );
    }
}
