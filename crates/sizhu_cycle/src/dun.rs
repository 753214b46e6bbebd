//! Stem-borrowing rules (dun) for month and hour pillars.
//!
//! The year stem fixes the stem of the tiger month (five-tiger, 五虎遁) and
//! the day stem fixes the stem of the rat hour (five-rat, 五鼠遁). Stems then
//! advance one per month or hour bracket.

use crate::branch::{ALL_BRANCHES, EarthlyBranch, MONTH_BRANCHES};
use crate::pillar::SexagenaryPillar;
use crate::stem::HeavenlyStem;

/// Which borrowing rule, and therefore which branch order, applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DunRule {
    /// Month pillars from the year stem; branch order starts at 寅.
    FiveTiger,
    /// Hour pillars from the day stem; branch order starts at 子.
    FiveRat,
}

impl DunRule {
    pub const fn name(self) -> &'static str {
        match self {
            Self::FiveTiger => "five-tiger",
            Self::FiveRat => "five-rat",
        }
    }

    /// Stem at branch position 0 for this reference stem.
    pub const fn start_stem(self, reference: HeavenlyStem) -> HeavenlyStem {
        match self {
            Self::FiveTiger => five_tiger_start(reference),
            Self::FiveRat => five_rat_start(reference),
        }
    }

    /// Branch order the positions 0..12 refer to.
    pub const fn branch_order(self) -> &'static [EarthlyBranch; 12] {
        match self {
            Self::FiveTiger => &MONTH_BRANCHES,
            Self::FiveRat => &ALL_BRANCHES,
        }
    }

    /// Pillar at `position` (mod 12) of the rule's branch order.
    pub const fn pillar_at(self, reference: HeavenlyStem, position: u8) -> SexagenaryPillar {
        let k = position % 12;
        let stem = self.start_stem(reference).offset(k as i64);
        SexagenaryPillar::from_parts(stem, self.branch_order()[k as usize])
    }
}

/// Stem of the tiger month: 甲己→丙, 乙庚→戊, 丙辛→庚, 丁壬→壬, 戊癸→甲.
pub const fn five_tiger_start(year_stem: HeavenlyStem) -> HeavenlyStem {
    HeavenlyStem::from_index((year_stem.index() % 5) * 2 + 2)
}

/// Stem of the rat hour: 甲己→甲, 乙庚→丙, 丙辛→戊, 丁壬→庚, 戊癸→壬.
pub const fn five_rat_start(day_stem: HeavenlyStem) -> HeavenlyStem {
    HeavenlyStem::from_index((day_stem.index() % 5) * 2)
}

/// Month pillar for a year stem and the month's branch.
pub const fn month_pillar(year_stem: HeavenlyStem, month_branch: EarthlyBranch) -> SexagenaryPillar {
    DunRule::FiveTiger.pillar_at(year_stem, month_branch.month_position())
}

/// Hour pillar for a day stem and the hour bracket's branch.
pub const fn hour_pillar(day_stem: HeavenlyStem, hour_branch: EarthlyBranch) -> SexagenaryPillar {
    DunRule::FiveRat.pillar_at(day_stem, hour_branch.index())
}

/// All twelve month pillars of a year, tiger month first.
pub fn month_table(year_stem: HeavenlyStem) -> [SexagenaryPillar; 12] {
    std::array::from_fn(|k| DunRule::FiveTiger.pillar_at(year_stem, k as u8))
}

/// All twelve hour pillars of a day, rat hour first.
pub fn hour_table(day_stem: HeavenlyStem) -> [SexagenaryPillar; 12] {
    std::array::from_fn(|k| DunRule::FiveRat.pillar_at(day_stem, k as u8))
}

/// Branches whose computed stem under `rule` equals `candidate_stem`,
/// in the rule's branch order. One or two entries.
pub fn valid_branches_for(
    reference_stem: HeavenlyStem,
    candidate_stem: HeavenlyStem,
    rule: DunRule,
) -> Vec<EarthlyBranch> {
    let start = rule.start_stem(reference_stem);
    rule.branch_order()
        .iter()
        .enumerate()
        .filter(|&(k, _)| start.offset(k as i64) == candidate_stem)
        .map(|(_, &b)| b)
        .collect()
}

/// Whether `pillar` can be a month pillar in a year with `year_stem`.
pub fn is_valid_month_pillar(year_stem: HeavenlyStem, pillar: SexagenaryPillar) -> bool {
    month_pillar(year_stem, pillar.branch()) == pillar
}

/// Whether `pillar` can be an hour pillar on a day with `day_stem`.
pub fn is_valid_hour_pillar(day_stem: HeavenlyStem, pillar: SexagenaryPillar) -> bool {
    hour_pillar(day_stem, pillar.branch()) == pillar
}
