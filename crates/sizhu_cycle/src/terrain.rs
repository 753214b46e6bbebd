//! Twelve life stages (changsheng) of a stem across the branches.
//!
//! Each stem is born (长生) on a fixed branch. Yang stems walk forward
//! through the branches, yin stems backward.

use std::fmt::{Display, Formatter};

use crate::branch::EarthlyBranch;
use crate::element::Polarity;
use crate::stem::HeavenlyStem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Terrain {
    Birth,
    Bathing,
    Capping,
    Office,
    Peak,
    Decline,
    Sickness,
    Death,
    Tomb,
    Extinction,
    Conception,
    Nurture,
}

pub const ALL_TERRAINS: [Terrain; 12] = [
    Terrain::Birth,
    Terrain::Bathing,
    Terrain::Capping,
    Terrain::Office,
    Terrain::Peak,
    Terrain::Decline,
    Terrain::Sickness,
    Terrain::Death,
    Terrain::Tomb,
    Terrain::Extinction,
    Terrain::Conception,
    Terrain::Nurture,
];

const TERRAIN_NAMES: [&str; 12] = [
    "长生", "沐浴", "冠带", "临官", "帝旺", "衰", "病", "死", "墓", "绝", "胎", "养",
];

/// Birth branch index per stem, 甲 to 癸.
const BIRTH_BRANCH: [u8; 10] = [11, 6, 2, 9, 2, 9, 5, 0, 8, 3];

impl Terrain {
    pub const fn index(self) -> u8 {
        match self {
            Self::Birth => 0,
            Self::Bathing => 1,
            Self::Capping => 2,
            Self::Office => 3,
            Self::Peak => 4,
            Self::Decline => 5,
            Self::Sickness => 6,
            Self::Death => 7,
            Self::Tomb => 8,
            Self::Extinction => 9,
            Self::Conception => 10,
            Self::Nurture => 11,
        }
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_TERRAINS[(index % 12) as usize]
    }

    pub const fn chinese(self) -> &'static str {
        TERRAIN_NAMES[self.index() as usize]
    }
}

impl HeavenlyStem {
    /// Branch on which this stem is born.
    pub const fn birth_branch(self) -> EarthlyBranch {
        EarthlyBranch::from_index(BIRTH_BRANCH[self.index() as usize])
    }

    /// Life stage of this stem on `branch`.
    pub const fn terrain(self, branch: EarthlyBranch) -> Terrain {
        let birth = BIRTH_BRANCH[self.index() as usize];
        let steps = match self.polarity() {
            Polarity::Yang => (branch.index() + 12 - birth) % 12,
            Polarity::Yin => (birth + 12 - branch.index()) % 12,
        };
        Terrain::from_index(steps)
    }
}

impl Display for Terrain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.chinese())
    }
}
