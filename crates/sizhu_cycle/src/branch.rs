//! Earthly branches (dizhi), the 12-position cycle, and the two-hour
//! civil brackets they name.

use std::fmt::{Display, Formatter};

use crate::element::{Element, Polarity};
use crate::stem::HeavenlyStem;

/// The 12 earthly branches, 子 to 亥.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (index 0 = 子). Also the order of the
/// day's hour brackets.
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

/// Month branches in solar-month order, starting with the tiger month 寅.
pub const MONTH_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
];

/// Stems stored in a branch (canggan): the main qi and, for most
/// branches, a middle and a residual qi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HiddenStems {
    pub main: HeavenlyStem,
    pub middle: Option<HeavenlyStem>,
    pub residual: Option<HeavenlyStem>,
}

impl HiddenStems {
    /// Present stems, main first.
    pub fn iter(&self) -> impl Iterator<Item = HeavenlyStem> + '_ {
        std::iter::once(self.main).chain(self.middle).chain(self.residual)
    }
}

const BRANCH_CHARS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

impl EarthlyBranch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at `index` mod 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// The branch `n` positions later in the cycle (earlier if negative).
    pub const fn offset(self, n: i64) -> Self {
        Self::from_index((self.index() as i64 + n).rem_euclid(12) as u8)
    }

    pub const fn chinese(self) -> char {
        BRANCH_CHARS[self.index() as usize]
    }

    /// Pinyin name without tone marks.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::of_index(self.index())
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// Look up a branch by its Chinese character.
    pub fn from_char(c: char) -> Option<Self> {
        BRANCH_CHARS.iter().position(|&b| b == c).map(|i| ALL_BRANCHES[i])
    }

    /// Branch whose two-hour bracket contains civil hour `hour` (0..=23).
    /// 23:00 belongs to 子.
    pub const fn for_hour(hour: u32) -> Self {
        Self::from_index((((hour + 1) / 2) % 12) as u8)
    }

    /// Representative even hour of the bracket: 子 ↦ 0, 丑 ↦ 2, … 亥 ↦ 22.
    pub const fn representative_hour(self) -> u32 {
        self.index() as u32 * 2
    }

    /// `(start, end)` civil hours of the bracket, e.g. 子 ↦ (23, 1).
    pub const fn bracket(self) -> (u32, u32) {
        let mid = self.index() as u32 * 2;
        ((mid + 23) % 24, (mid + 1) % 24)
    }

    /// Bracket label such as `"子 (23:00-01:00)"`.
    pub fn bracket_label(self) -> String {
        let (start, end) = self.bracket();
        format!("{} ({start:02}:00-{end:02}:00)", self.chinese())
    }

    /// Hidden stems of the branch.
    pub const fn hidden_stems(self) -> HiddenStems {
        use HeavenlyStem as S;
        let (main, middle, residual) = match self {
            Self::Zi => (S::Gui, None, None),
            Self::Chou => (S::Ji, Some(S::Gui), Some(S::Xin)),
            Self::Yin => (S::Jia, Some(S::Bing), Some(S::Wu)),
            Self::Mao => (S::Yi, None, None),
            Self::Chen => (S::Wu, Some(S::Yi), Some(S::Gui)),
            Self::Si => (S::Bing, Some(S::Geng), Some(S::Wu)),
            Self::Wu => (S::Ding, Some(S::Ji), None),
            Self::Wei => (S::Ji, Some(S::Ding), Some(S::Yi)),
            Self::Shen => (S::Geng, Some(S::Ren), Some(S::Wu)),
            Self::You => (S::Xin, None, None),
            Self::Xu => (S::Wu, Some(S::Xin), Some(S::Ding)),
            Self::Hai => (S::Ren, Some(S::Jia), None),
        };
        HiddenStems {
            main,
            middle,
            residual,
        }
    }

    /// Position in solar-month order (寅 = 0 .. 丑 = 11).
    pub const fn month_position(self) -> u8 {
        (self.index() + 10) % 12
    }
}

impl Display for EarthlyBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chinese())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(EarthlyBranch::from_index(i as u8), *b);
            assert_eq!(EarthlyBranch::from_char(b.chinese()), Some(*b));
        }
    }

    #[test]
    fn hour_brackets() {
        assert_eq!(EarthlyBranch::for_hour(23), EarthlyBranch::Zi);
        assert_eq!(EarthlyBranch::for_hour(0), EarthlyBranch::Zi);
        assert_eq!(EarthlyBranch::for_hour(1), EarthlyBranch::Chou);
        assert_eq!(EarthlyBranch::for_hour(12), EarthlyBranch::Wu);
        assert_eq!(EarthlyBranch::for_hour(22), EarthlyBranch::Hai);
    }

    #[test]
    fn representative_hour_maps_back() {
        for b in ALL_BRANCHES {
            assert_eq!(EarthlyBranch::for_hour(b.representative_hour()), b);
        }
    }

    #[test]
    fn bracket_labels() {
        assert_eq!(EarthlyBranch::Zi.bracket_label(), "子 (23:00-01:00)");
        assert_eq!(EarthlyBranch::Chou.bracket_label(), "丑 (01:00-03:00)");
        assert_eq!(EarthlyBranch::Hai.bracket_label(), "亥 (21:00-23:00)");
    }

    #[test]
    fn month_order_positions() {
        for (k, b) in MONTH_BRANCHES.iter().enumerate() {
            assert_eq!(b.month_position() as usize, k);
        }
    }

    #[test]
    fn hidden_stems_table() {
        let text = |b: EarthlyBranch| b.hidden_stems().iter().map(|s| s.chinese()).collect::<String>();
        assert_eq!(text(EarthlyBranch::Zi), "癸");
        assert_eq!(text(EarthlyBranch::Yin), "甲丙戊");
        assert_eq!(text(EarthlyBranch::Wu), "丁己");
        assert_eq!(text(EarthlyBranch::Xu), "戊辛丁");
        assert_eq!(text(EarthlyBranch::Hai), "壬甲");
    }

    #[test]
    fn main_qi_shares_the_branch_element() {
        for b in ALL_BRANCHES {
            let hidden = b.hidden_stems();
            assert_eq!(hidden.main.element(), b.element(), "branch {b}");
            assert!(hidden.middle.is_some() || hidden.residual.is_none());
        }
    }

    #[test]
    fn earth_branches() {
        let earth: Vec<_> = ALL_BRANCHES
            .iter()
            .filter(|b| b.element() == Element::Earth)
            .collect();
        assert_eq!(earth.len(), 4);
    }
}
