//! Ten gods (shishen): how a stem relates to the day stem.
//!
//! The relation is the element step from the day stem to the other stem
//! (same, generated, overcome, overcoming, generating) split by whether the
//! two polarities agree.

use std::fmt::{Display, Formatter};

use crate::element::Element;
use crate::stem::HeavenlyStem;

/// The ten gods, in element-step order. Even variants share the day stem's
/// polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TenGod {
    Companion,
    RobWealth,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
    IndirectResource,
    DirectResource,
}

pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Companion,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

impl TenGod {
    pub const fn index(self) -> u8 {
        match self {
            Self::Companion => 0,
            Self::RobWealth => 1,
            Self::EatingGod => 2,
            Self::HurtingOfficer => 3,
            Self::IndirectWealth => 4,
            Self::DirectWealth => 5,
            Self::SevenKillings => 6,
            Self::DirectOfficer => 7,
            Self::IndirectResource => 8,
            Self::DirectResource => 9,
        }
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_TEN_GODS[(index % 10) as usize]
    }

    /// Relation of `other` to the day stem `day`.
    pub const fn between(day: HeavenlyStem, other: HeavenlyStem) -> Self {
        let step = (element_position(other.element()) + 5 - element_position(day.element())) % 5;
        let differs = (day.index() + other.index()) % 2;
        Self::from_index(step * 2 + differs)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Companion => "Companion",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Companion => "比肩",
            Self::RobWealth => "劫财",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "伤官",
            Self::IndirectWealth => "偏财",
            Self::DirectWealth => "正财",
            Self::SevenKillings => "七杀",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }

    /// One-character abbreviation used in compact charts.
    pub const fn short(self) -> char {
        match self {
            Self::Companion => '比',
            Self::RobWealth => '劫',
            Self::EatingGod => '食',
            Self::HurtingOfficer => '伤',
            Self::IndirectWealth => '才',
            Self::DirectWealth => '财',
            Self::SevenKillings => '杀',
            Self::DirectOfficer => '官',
            Self::IndirectResource => '枭',
            Self::DirectResource => '印',
        }
    }
}

impl HeavenlyStem {
    /// Ten god of `other` seen from `self` as the day stem.
    pub const fn ten_god(self, other: HeavenlyStem) -> TenGod {
        TenGod::between(self, other)
    }
}

impl Display for TenGod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.chinese())
    }
}

const fn element_position(e: Element) -> u8 {
    match e {
        Element::Wood => 0,
        Element::Fire => 1,
        Element::Earth => 2,
        Element::Metal => 3,
        Element::Water => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn seen_from_jia() {
        let jia = HeavenlyStem::Jia;
        let got: Vec<_> = ALL_STEMS.iter().map(|&s| jia.ten_god(s)).collect();
        assert_eq!(got, ALL_TEN_GODS.to_vec());
    }

    #[test]
    fn seen_from_a_yin_stem() {
        let xin = HeavenlyStem::Xin;
        assert_eq!(xin.ten_god(HeavenlyStem::Xin), TenGod::Companion);
        assert_eq!(xin.ten_god(HeavenlyStem::Geng), TenGod::RobWealth);
        assert_eq!(xin.ten_god(HeavenlyStem::Gui), TenGod::EatingGod);
        assert_eq!(xin.ten_god(HeavenlyStem::Ren), TenGod::HurtingOfficer);
        assert_eq!(xin.ten_god(HeavenlyStem::Yi), TenGod::IndirectWealth);
        assert_eq!(xin.ten_god(HeavenlyStem::Jia), TenGod::DirectWealth);
        assert_eq!(xin.ten_god(HeavenlyStem::Ding), TenGod::SevenKillings);
        assert_eq!(xin.ten_god(HeavenlyStem::Bing), TenGod::DirectOfficer);
        assert_eq!(xin.ten_god(HeavenlyStem::Ji), TenGod::IndirectResource);
        assert_eq!(xin.ten_god(HeavenlyStem::Wu), TenGod::DirectResource);
    }

    #[test]
    fn every_day_stem_sees_each_god_once() {
        for day in ALL_STEMS {
            let mut seen = [false; 10];
            for other in ALL_STEMS {
                seen[day.ten_god(other).index() as usize] = true;
            }
            assert!(seen.iter().all(|&s| s), "day stem {day}");
            assert_eq!(day.ten_god(day), TenGod::Companion);
        }
    }

    #[test]
    fn labels() {
        assert_eq!(TenGod::SevenKillings.to_string(), "七杀");
        assert_eq!(TenGod::IndirectResource.short(), '枭');
        assert_eq!(TenGod::from_index(13), TenGod::HurtingOfficer);
    }
}
