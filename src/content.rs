//! Static teaching content shown in modals: the four Bridge roles and the
//! class-explosion calculator.

use std::str::FromStr;

use crate::error::InputError;
use crate::model::{ColorKind, ShapeKind};
use crate::state::{ModalContent, ModalExample};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Concept {
    Abstraction,
    RefinedAbstraction,
    Implementor,
    ConcreteImplementor,
}

impl Concept {
    pub const ALL: [Concept; 4] = [
        Concept::Abstraction,
        Concept::RefinedAbstraction,
        Concept::Implementor,
        Concept::ConcreteImplementor,
    ];

    /// Identifier carried by the card's `data-concept` attribute.
    pub fn id(self) -> &'static str {
        match self {
            Concept::Abstraction => "abstraction",
            Concept::RefinedAbstraction => "refined-abstraction",
            Concept::Implementor => "implementor",
            Concept::ConcreteImplementor => "concrete-implementor",
        }
    }

    pub fn card_title(self) -> &'static str {
        match self {
            Concept::Abstraction => "Abstraction",
            Concept::RefinedAbstraction => "Refined Abstraction",
            Concept::Implementor => "Implementor",
            Concept::ConcreteImplementor => "Concrete Implementor",
        }
    }

    pub fn card_summary(self) -> &'static str {
        match self {
            Concept::Abstraction => "Shape: holds a reference to a Color",
            Concept::RefinedAbstraction => "Circle, Square, Triangle",
            Concept::Implementor => "Color: fill and stroke operations",
            Concept::ConcreteImplementor => "Red, Blue, Green",
        }
    }

    pub fn content(self) -> ModalContent {
        match self {
            Concept::Abstraction => ModalContent {
                title: "Abstraction (Shape)",
                description: "The high-level type that defines shape operations and holds a \
                              reference to a Color object for delegation.",
                example: Some(ModalExample::Text(
                    "In the playground every connection pairs one shape with one color; the \
                     shape never knows which concrete color it is drawn with.",
                )),
                code: Some(ABSTRACTION_CODE),
            },
            Concept::RefinedAbstraction => ModalContent {
                title: "Refined Abstraction",
                description: "Concrete shapes define their own outline but delegate every \
                              color detail to the Color they are bridged to.",
                example: Some(ModalExample::Text(
                    "Circle, Square and Triangle each produce an outline; filling and \
                     stroking it is left to the color.",
                )),
                code: Some(REFINED_ABSTRACTION_CODE),
            },
            Concept::Implementor => ModalContent {
                title: "Implementor (Color)",
                description: "The Color interface defines the primitive styling operations, \
                              independent of any shape.",
                example: Some(ModalExample::Text(
                    "Each color answers two questions: which fill style and which stroke style.",
                )),
                code: Some(IMPLEMENTOR_CODE),
            },
            Concept::ConcreteImplementor => ModalContent {
                title: "Concrete Implementor",
                description: "Specific colors fulfil the Color interface and encapsulate the \
                              rendering details of the drawing platform.",
                example: Some(ModalExample::Text(
                    "The playground canvas receives the fill and stroke values straight from \
                     Red, Blue or Green.",
                )),
                code: Some(CONCRETE_IMPLEMENTOR_CODE),
            },
        }
    }
}

impl FromStr for Concept {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Concept::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| InputError::UnknownConcept(s.to_string()))
    }
}

/// Class counts with and without the Bridge, computed from the registries.
#[derive(Clone, Debug, PartialEq)]
pub struct ExplosionReport {
    pub shapes: usize,
    pub colors: usize,
    /// One class name per combination, grouped by color.
    pub combinations: Vec<String>,
}

impl ExplosionReport {
    pub fn from_registries() -> Self {
        let combinations = ColorKind::ALL
            .iter()
            .flat_map(|c| ShapeKind::ALL.iter().map(move |s| format!("{}{}", c.name(), s.name())))
            .collect();
        Self {
            shapes: ShapeKind::ALL.len(),
            colors: ColorKind::ALL.len(),
            combinations,
        }
    }

    /// One class for every shape/color combination.
    pub fn without_bridge(&self) -> usize {
        self.shapes * self.colors
    }

    /// Two independent hierarchies.
    pub fn with_bridge(&self) -> usize {
        self.shapes + self.colors
    }
}

pub fn explosion_content() -> ModalContent {
    ModalContent {
        title: "Class Explosion Calculator",
        description: "Understand why the Bridge pattern prevents exponential growth.",
        example: Some(ModalExample::Explosion(ExplosionReport::from_registries())),
        code: Some(EXPLOSION_CODE),
    }
}

const ABSTRACTION_CODE: &str = r#"pub struct Shape {
    kind: ShapeKind,
    color: Box<dyn Color>, // the bridge
}

impl Shape {
    pub fn draw(&self, surface: &mut dyn Surface) {
        let outline = self.kind.outline(self.center(), self.size());
        surface.draw_outline(&outline, self.color.fill(), self.color.stroke(), 3.0);
    }
}"#;

const REFINED_ABSTRACTION_CODE: &str = r#"match self {
    ShapeKind::Circle => Outline::Circle { center, radius: half },
    ShapeKind::Square => Outline::Polygon(vec![
        (cx - half, cy - half), (cx + half, cy - half),
        (cx + half, cy + half), (cx - half, cy + half),
    ]),
    ShapeKind::Triangle => Outline::Polygon(vec![
        (cx, cy - half), (cx - half, cy + half), (cx + half, cy + half),
    ]),
}"#;

const IMPLEMENTOR_CODE: &str = r#"pub trait Color {
    fn fill(&self) -> &'static str;
    fn stroke(&self) -> &'static str;
}"#;

const CONCRETE_IMPLEMENTOR_CODE: &str = r##"struct Red;

impl Color for Red {
    fn fill(&self) -> &'static str { "#FF4757" }
    fn stroke(&self) -> &'static str { "#c44569" }
}"##;

const EXPLOSION_CODE: &str = r#"// Without Bridge: one type per combination
struct RedCircle;
struct BlueCircle;
// ... 7 more

// With Bridge: shapes and colors vary independently
Shape::new(ShapeKind::Circle, Box::new(Red));
Shape::new(ShapeKind::Square, Box::new(Blue));"#;
