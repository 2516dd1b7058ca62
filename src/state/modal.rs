// Modal presenter state. Open/close are immediate; closing keeps the content mounted
// for the fade-out before it is removed.
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq)]
pub enum ModalExample {
    Text(&'static str),
    Explosion(crate::content::ExplosionReport),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalContent {
    pub title: &'static str,
    pub description: &'static str,
    pub example: Option<ModalExample>,
    pub code: Option<&'static str>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open(ModalContent),
    Closing(ModalContent),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    pub phase: ModalPhase,
    /// Bumped on every open, so a stale removal timer cannot close a newer modal.
    pub generation: u64,
}

impl ModalState {
    pub fn content(&self) -> Option<&ModalContent> {
        match &self.phase {
            ModalPhase::Open(c) | ModalPhase::Closing(c) => Some(c),
            ModalPhase::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, ModalPhase::Open(_))
    }

    pub fn is_closing(&self) -> bool {
        matches!(self.phase, ModalPhase::Closing(_))
    }
}

#[derive(Clone, Debug)]
pub enum ModalAction {
    /// Replaces whatever modal is showing.
    Open(ModalContent),
    BeginClose,
    /// Removes the modal if `generation` is still the one that started closing.
    Remove { generation: u64 },
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ModalAction::Open(content) => Rc::new(ModalState {
                phase: ModalPhase::Open(content),
                generation: self.generation + 1,
            }),
            ModalAction::BeginClose => match &self.phase {
                ModalPhase::Open(c) => Rc::new(ModalState {
                    phase: ModalPhase::Closing(c.clone()),
                    generation: self.generation,
                }),
                _ => self,
            },
            ModalAction::Remove { generation } => {
                if self.is_closing() && generation == self.generation {
                    Rc::new(ModalState { phase: ModalPhase::Closed, generation })
                } else {
                    self
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(title: &'static str) -> ModalContent {
        ModalContent { title, description: "d", example: None, code: None }
    }

    fn apply(state: ModalState, action: ModalAction) -> ModalState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn open_close_remove_cycle() {
        let s = apply(ModalState::default(), ModalAction::Open(content("A")));
        assert!(s.is_open());
        let gen_a = s.generation;
        let s = apply(s, ModalAction::BeginClose);
        assert!(s.is_closing());
        assert_eq!(s.content().map(|c| c.title), Some("A"));
        let s = apply(s, ModalAction::Remove { generation: gen_a });
        assert_eq!(s.phase, ModalPhase::Closed);
        assert_eq!(s.content(), None);
    }

    #[test]
    fn opening_replaces_current_modal() {
        let s = apply(ModalState::default(), ModalAction::Open(content("A")));
        let s = apply(s, ModalAction::Open(content("B")));
        assert_eq!(s.content().map(|c| c.title), Some("B"));
        assert!(s.is_open());
    }

    #[test]
    fn stale_removal_keeps_reopened_modal() {
        let s = apply(ModalState::default(), ModalAction::Open(content("A")));
        let s = apply(s, ModalAction::BeginClose);
        let stale = s.generation;
        let s = apply(s, ModalAction::Open(content("B")));
        let s = apply(s, ModalAction::Remove { generation: stale });
        assert!(s.is_open());
        assert_eq!(s.content().map(|c| c.title), Some("B"));
    }

    #[test]
    fn closing_a_closed_modal_is_a_no_op() {
        let s = apply(ModalState::default(), ModalAction::BeginClose);
        assert_eq!(s, ModalState::default());
    }
}
