//! Status - 募集数の集計ビュー（診断用）

use serde::{Deserialize, Serialize};

use crate::domain::{Recruitment, RecruitmentStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruitmentCounts {
    pub open: usize,
    pub full: usize,
    pub closed: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl RecruitmentCounts {
    pub fn tally<'a>(recruitments: impl IntoIterator<Item = &'a Recruitment>) -> Self {
        let mut counts = Self::default();
        for recruitment in recruitments {
            match recruitment.status {
                RecruitmentStatus::Open => counts.open += 1,
                RecruitmentStatus::Full => counts.full += 1,
                RecruitmentStatus::Closed => counts.closed += 1,
                RecruitmentStatus::Completed => counts.completed += 1,
                RecruitmentStatus::Cancelled => counts.cancelled += 1,
            }
        }
        counts
    }

    pub fn active(&self) -> usize {
        self.open + self.full
    }

    pub fn total(&self) -> usize {
        self.open + self.full + self.closed + self.completed + self.cancelled
    }
}
