// crates/domain/src/analytics/aggregate.rs
use robotict_shared_kernel::TallyCount;
use serde::Serialize;

use crate::{
    classify::{Category, Label},
    config::DivisorPair,
};

/// Per-category label counts over one sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub robot: TallyCount,
    pub ict: TallyCount,
    pub robot_ict: TallyCount,
    pub plain: TallyCount,
}

impl Statistics {
    /// Classify every member of `sequence` and count the outcomes in one pass.
    pub fn tally(sequence: &[i64], divisors: DivisorPair) -> Self {
        Self::from_labels(sequence.iter().map(|&n| divisors.classify(n)))
    }

    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = Label>,
    {
        labels.into_iter().fold(Self::default(), |mut stats, label| {
            stats.record(label.category());
            stats
        })
    }

    pub fn record(&mut self, category: Category) {
        self.slot_mut(category).bump();
    }

    pub const fn get(&self, category: Category) -> TallyCount {
        match category {
            Category::Robot => self.robot,
            Category::Ict => self.ict,
            Category::RobotIct => self.robot_ict,
            Category::Plain => self.plain,
        }
    }

    /// Sum of all four buckets; equals the length of the tallied sequence.
    pub fn total(&self) -> TallyCount {
        self.iter().map(|(_, count)| count).sum()
    }

    /// Buckets in report order: Robot, ICT, RobotICT, plain numbers.
    pub fn iter(&self) -> impl Iterator<Item = (Category, TallyCount)> + '_ {
        Category::ALL.into_iter().map(|category| (category, self.get(category)))
    }

    fn slot_mut(&mut self, category: Category) -> &mut TallyCount {
        match category {
            Category::Robot => &mut self.robot,
            Category::Ict => &mut self.ict,
            Category::RobotIct => &mut self.robot_ict,
            Category::Plain => &mut self.plain,
        }
    }
}
