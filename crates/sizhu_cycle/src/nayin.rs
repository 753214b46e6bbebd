//! Na-yin (纳音), the 30 "melodic elements" of the sexagenary cycle.
//!
//! Consecutive pillars share one na-yin: 甲子 and 乙丑 are both 海中金,
//! 丙寅 and 丁卯 both 炉中火, and so on through 壬戌 and 癸亥.

use std::fmt::{Display, Formatter};

use crate::element::Element;

/// One of the 30 na-yin, identified by its position 0..30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaYin(u8);

const NAYIN_NAMES: [&str; 30] = [
    "海中金", "炉中火", "大林木", "路旁土", "剑锋金", "山头火",
    "涧下水", "城头土", "白蜡金", "杨柳木", "泉中水", "屋上土",
    "霹雳火", "松柏木", "长流水", "砂中金", "山下火", "平地木",
    "壁上土", "金箔金", "覆灯火", "天河水", "大驿土", "钗钏金",
    "桑柘木", "大溪水", "沙中土", "天上火", "石榴木", "大海水",
];

impl NaYin {
    /// Na-yin of the pillar at sexagenary `cycle_index` (0..60, reduced).
    pub const fn for_cycle_index(cycle_index: u8) -> Self {
        Self((cycle_index % 60) / 2)
    }

    /// Position 0..30 in the na-yin sequence.
    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn name(self) -> &'static str {
        NAYIN_NAMES[self.0 as usize]
    }

    /// The element named by the last character of the na-yin.
    pub const fn element(self) -> Element {
        match self.0 % 30 {
            0 | 4 | 8 | 15 | 19 | 23 => Element::Metal,
            1 | 5 | 12 | 16 | 20 | 27 => Element::Fire,
            2 | 9 | 13 | 17 | 24 | 28 => Element::Wood,
            3 | 7 | 11 | 18 | 22 | 26 => Element::Earth,
            _ => Element::Water,
        }
    }
}

impl Display for NaYin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
