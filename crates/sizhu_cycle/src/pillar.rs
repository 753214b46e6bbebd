//! Sexagenary pillars (ganzhi): a stem paired with a branch of the same
//! polarity. Exactly 60 such pairs exist.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::branch::EarthlyBranch;
use crate::element::Polarity;
use crate::error::CycleError;
use crate::nayin::NaYin;
use crate::stem::HeavenlyStem;

/// A legal stem/branch pair. Valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SexagenaryPillar {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
}

/// Whether a stem and branch agree in polarity.
pub const fn is_valid_pairing(stem: HeavenlyStem, branch: EarthlyBranch) -> bool {
    stem.index() % 2 == branch.index() % 2
}

impl SexagenaryPillar {
    /// Pair a stem and branch; fails when their polarities differ.
    pub fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Result<Self, CycleError> {
        if !is_valid_pairing(stem, branch) {
            return Err(CycleError::InvalidPillar {
                input: format!("{stem}{branch}"),
                reason: "stem and branch polarity differ",
            });
        }
        Ok(Self { stem, branch })
    }

    /// Pillar at position `index` mod 60 (0 = 甲子, 59 = 癸亥).
    pub const fn from_cycle_index(index: u8) -> Self {
        let i = index % 60;
        Self {
            stem: HeavenlyStem::from_index(i % 10),
            branch: EarthlyBranch::from_index(i % 12),
        }
    }

    /// Position in the 60-cycle.
    ///
    /// The unique `n` with `n ≡ stem (mod 10)` and `n ≡ branch (mod 12)`,
    /// which is `6·stem − 5·branch (mod 60)`.
    pub const fn cycle_index(self) -> u8 {
        let n = 6 * self.stem.index() as i32 - 5 * self.branch.index() as i32;
        n.rem_euclid(60) as u8
    }

    /// The pillar `n` positions later in the cycle (earlier if negative).
    pub const fn offset(self, n: i64) -> Self {
        Self::from_cycle_index((self.cycle_index() as i64 + n).rem_euclid(60) as u8)
    }

    pub const fn stem(self) -> HeavenlyStem {
        self.stem
    }

    pub const fn branch(self) -> EarthlyBranch {
        self.branch
    }

    pub const fn polarity(self) -> Polarity {
        self.stem.polarity()
    }

    /// Two-character name such as `甲子`.
    pub fn name(self) -> String {
        self.to_string()
    }

    /// The two void branches (xun-kong) of this pillar's ten-day decade.
    pub const fn xun_kong(self) -> [EarthlyBranch; 2] {
        let lead = self.branch.index() as i64 - self.stem.index() as i64;
        [
            EarthlyBranch::from_index((lead + 10).rem_euclid(12) as u8),
            EarthlyBranch::from_index((lead + 11).rem_euclid(12) as u8),
        ]
    }

    pub const fn na_yin(self) -> NaYin {
        NaYin::for_cycle_index(self.cycle_index())
    }

    /// Fetal origin (taiyuan) of a month pillar: stem one ahead, branch
    /// three ahead.
    pub const fn fetal_origin(self) -> Self {
        Self {
            stem: self.stem.offset(1),
            branch: self.branch.offset(3),
        }
    }

    /// Every legal pillar in cycle order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..60u8).map(Self::from_cycle_index)
    }

    /// Build from parts already known to agree in polarity.
    pub(crate) const fn from_parts(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }
}

impl Display for SexagenaryPillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for SexagenaryPillar {
    type Err = CycleError;

    /// Parse a two-character name such as `丙寅`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| CycleError::InvalidPillar {
            input: s.to_string(),
            reason,
        };
        let mut chars = s.trim().chars();
        let (Some(sc), Some(bc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid("expected exactly two characters"));
        };
        let stem = HeavenlyStem::from_char(sc).ok_or_else(|| invalid("unknown stem"))?;
        let branch = EarthlyBranch::from_char(bc).ok_or_else(|| invalid("unknown branch"))?;
        if !is_valid_pairing(stem, branch) {
            return Err(invalid("stem and branch polarity differ"));
        }
        Ok(Self { stem, branch })
    }
}

/// Sexagenary year pillar of a year numbered from the lunar new year
/// (or the tiger-month boundary): CE 4 was 甲子.
pub const fn year_pillar_for(year: i32) -> SexagenaryPillar {
    SexagenaryPillar::from_cycle_index((year as i64 - 4).rem_euclid(60) as u8)
}
