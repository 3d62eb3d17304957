/// Where an item sits relative to the current pointer of its sequence.
///
/// Steps read these as completed/current/upcoming, timelines as
/// past/current/future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

impl StepStatus {
    pub const ALL: &'static [StepStatus] = &[
        StepStatus::Completed,
        StepStatus::Current,
        StepStatus::Upcoming,
    ];

    pub fn derive(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }

    /// Statuses for a whole sequence, recomputed on every call.
    pub fn derive_all(len: usize, current: usize) -> Vec<Self> {
        (0..len).map(|i| Self::derive(i, current)).collect()
    }

    pub fn class(&self) -> &'static str {
        match self {
            StepStatus::Completed => "completed",
            StepStatus::Current => "current",
            StepStatus::Upcoming => "upcoming",
        }
    }

    /// Timeline wording for the same position.
    pub fn timeline_class(&self) -> &'static str {
        match self {
            StepStatus::Completed => "past",
            StepStatus::Current => "current",
            StepStatus::Upcoming => "future",
        }
    }
}
