// Call log shown next to the playground canvas.
use std::collections::VecDeque;

use crate::config::CALL_LOG_CAPACITY;
use crate::model::{ColorKind, ShapeKind};

pub const LOG_PLACEHOLDER: &str = "Connect a shape with a color to see the Bridge calls!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogEntry {
    /// One shape delegating its styling to one color.
    Delegation { shape: ShapeKind, color: ColorKind },
    /// Draw-all summary across every live connection.
    Summary { connections: usize },
}

impl LogEntry {
    pub fn headline(&self) -> String {
        match self {
            LogEntry::Delegation { shape, .. } => format!("🔗 {}.draw() → Bridge Delegation", shape),
            LogEntry::Summary { .. } => "🎯 BRIDGE PATTERN DEMONSTRATION".to_string(),
        }
    }

    pub fn details(&self) -> Vec<String> {
        match *self {
            LogEntry::Delegation { shape, color } => vec![
                format!("→ {}.getFillStyle() → \"{}\"", color, color.fill()),
                format!("→ {}.getStrokeStyle() → \"{}\"", color, color.stroke()),
                format!("✨ {} successfully drawn in {}!", shape, color),
            ],
            LogEntry::Summary { connections } => vec![
                format!("→ {} active Bridge connection(s)", connections),
                "→ Each shape delegates color operations to Color object".to_string(),
                "→ Abstraction and implementation remain independent! ✨".to_string(),
            ],
        }
    }

    pub fn border(&self) -> &'static str {
        match self {
            LogEntry::Delegation { .. } => "1px solid #10b981",
            LogEntry::Summary { .. } => "2px solid #f59e0b",
        }
    }
}

/// Newest-first list of log entries, capped at [`CALL_LOG_CAPACITY`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallLog {
    entries: VecDeque<LogEntry>,
}

impl CallLog {
    pub fn record_delegation(&mut self, shape: ShapeKind, color: ColorKind) {
        self.push(LogEntry::Delegation { shape, color });
    }

    pub fn record_summary(&mut self, connections: usize) {
        self.push(LogEntry::Summary { connections });
    }

    // Always insert, then drop the oldest overflow from the back.
    fn push(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(CALL_LOG_CAPACITY);
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegation_entry_names_shape_fill_and_stroke() {
        let e = LogEntry::Delegation { shape: ShapeKind::Circle, color: ColorKind::Red };
        assert_eq!(e.headline(), "🔗 Circle.draw() → Bridge Delegation");
        let d = e.details();
        assert_eq!(d[0], "→ Red.getFillStyle() → \"#FF4757\"");
        assert_eq!(d[1], "→ Red.getStrokeStyle() → \"#c44569\"");
        assert_eq!(d[2], "✨ Circle successfully drawn in Red!");
    }

    #[test]
    fn newest_entry_comes_first() {
        let mut log = CallLog::default();
        log.record_delegation(ShapeKind::Circle, ColorKind::Red);
        log.record_summary(1);
        let first = log.entries().next().copied();
        assert_eq!(first, Some(LogEntry::Summary { connections: 1 }));
    }

    #[test]
    fn log_never_exceeds_capacity() {
        let mut log = CallLog::default();
        for i in 0..20 {
            if i % 3 == 0 {
                log.record_summary(i);
            } else {
                log.record_delegation(ShapeKind::Square, ColorKind::Blue);
            }
            assert!(log.len() <= CALL_LOG_CAPACITY);
        }
        assert_eq!(log.len(), CALL_LOG_CAPACITY);
        // 18 was the last summary pushed and must survive the trim.
        assert!(log.entries().any(|e| *e == LogEntry::Summary { connections: 18 }));
        assert!(!log.entries().any(|e| *e == LogEntry::Summary { connections: 0 }));
    }
}
