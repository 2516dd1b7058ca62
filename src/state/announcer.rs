// Screen-reader live region message with expiry.
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Announcement {
    pub message: String,
    pub generation: u64,
}

#[derive(Clone, Debug)]
pub enum AnnounceAction {
    Say(String),
    /// Clears the message unless a newer one replaced it meanwhile.
    Expire { generation: u64 },
}

impl Reducible for Announcement {
    type Action = AnnounceAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AnnounceAction::Say(message) => Rc::new(Announcement {
                message,
                generation: self.generation + 1,
            }),
            AnnounceAction::Expire { generation } => {
                if generation != self.generation || self.message.is_empty() {
                    return self;
                }
                Rc::new(Announcement { message: String::new(), generation })
            }
        }
    }
}
