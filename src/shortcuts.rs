// Global keyboard shortcuts.
use crate::state::Step;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    ShowStep(Step),
    DrawAll,
    MoveAll,
    Clear,
}

impl Shortcut {
    /// Maps a `KeyboardEvent.key`. Letter shortcuts are ignored while Ctrl or Meta is
    /// held so browser bindings (copy, reload...) keep working.
    pub fn from_key(key: &str, ctrl: bool, meta: bool) -> Option<Shortcut> {
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        if let Some(d) = c.to_digit(10) {
            return Step::from_number(d as u8).map(Shortcut::ShowStep);
        }
        if ctrl || meta {
            return None;
        }
        match c {
            'd' => Some(Shortcut::DrawAll),
            'm' => Some(Shortcut::MoveAll),
            'c' => Some(Shortcut::Clear),
            _ => None,
        }
    }
}
