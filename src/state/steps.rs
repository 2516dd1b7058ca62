// Learning steps and the progress tracker derived from the active one.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Problem,
    Solution,
    Playground,
    DrawMethod,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Problem, Step::Solution, Step::Playground, Step::DrawMethod];

    /// 1-based position, as shown in the tracker and bound to the digit keys.
    pub fn number(self) -> u8 {
        match self {
            Step::Problem => 1,
            Step::Solution => 2,
            Step::Playground => 3,
            Step::DrawMethod => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Step> {
        Step::ALL.into_iter().find(|s| s.number() == n)
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Problem => "The Problem",
            Step::Solution => "The Solution",
            Step::Playground => "Playground",
            Step::DrawMethod => "The draw() Method",
        }
    }

    pub fn section_id(self) -> &'static str {
        match self {
            Step::Problem => "problem-section",
            Step::Solution => "solution-section",
            Step::Playground => "playground-section",
            Step::DrawMethod => "draw-method-section",
        }
    }

    /// How this step shows in the tracker while `current` is active.
    pub fn status(self, current: Step) -> StepStatus {
        match self.number().cmp(&current.number()) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_map_to_steps() {
        assert_eq!(Step::from_number(1), Some(Step::Problem));
        assert_eq!(Step::from_number(4), Some(Step::DrawMethod));
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(5), None);
    }

    #[test]
    fn tracker_marks_earlier_steps_completed() {
        let statuses: Vec<_> = Step::ALL.iter().map(|s| s.status(Step::Playground)).collect();
        assert_eq!(
            statuses,
            vec![
                StepStatus::Completed,
                StepStatus::Completed,
                StepStatus::Active,
                StepStatus::Pending
            ]
        );
        let active = Step::ALL
            .iter()
            .filter(|s| s.status(Step::Problem) == StepStatus::Active)
            .count();
        assert_eq!(active, 1);
    }
}
