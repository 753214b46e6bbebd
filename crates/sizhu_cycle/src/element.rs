//! Polarity (yin/yang) and the five elements.

/// Yin/yang polarity. Even cycle positions are yang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of a 0-based stem or branch index.
    pub const fn of_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }

    pub const fn chinese(self) -> char {
        match self {
            Self::Yang => '阳',
            Self::Yin => '阴',
        }
    }
}

/// The five elements (wuxing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    pub const fn chinese(self) -> char {
        match self {
            Self::Wood => '木',
            Self::Fire => '火',
            Self::Earth => '土',
            Self::Metal => '金',
            Self::Water => '水',
        }
    }

    /// The element this one generates (wood → fire → earth → metal → water → wood).
    pub const fn generates(self) -> Self {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one overcomes (wood → earth → water → fire → metal → wood).
    pub const fn overcomes(self) -> Self {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }
}

/// Seasonal strength of an element (wangxiang xiuqiu si) under the
/// element ruling the season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeasonalStrength {
    /// 旺: the ruling element.
    Prosperous,
    /// 相: generated by the ruler.
    Strong,
    /// 休: generates the ruler.
    Resting,
    /// 囚: overcomes the ruler.
    Confined,
    /// 死: overcome by the ruler.
    Dead,
}

impl SeasonalStrength {
    pub const fn chinese(self) -> char {
        match self {
            Self::Prosperous => '旺',
            Self::Strong => '相',
            Self::Resting => '休',
            Self::Confined => '囚',
            Self::Dead => '死',
        }
    }
}

impl Element {
    /// Strength of this element while `ruler` rules the season.
    pub const fn strength_under(self, ruler: Element) -> SeasonalStrength {
        if self as u8 == ruler as u8 {
            SeasonalStrength::Prosperous
        } else if ruler.generates() as u8 == self as u8 {
            SeasonalStrength::Strong
        } else if self.generates() as u8 == ruler as u8 {
            SeasonalStrength::Resting
        } else if self.overcomes() as u8 == ruler as u8 {
            SeasonalStrength::Confined
        } else {
            SeasonalStrength::Dead
        }
    }

    /// All five elements under `ruler`, strongest first (旺 相 休 囚 死).
    pub const fn seasonal_table(ruler: Element) -> [(Element, SeasonalStrength); 5] {
        [
            (ruler, SeasonalStrength::Prosperous),
            (ruler.generates(), SeasonalStrength::Strong),
            (ruler.generates().generates().generates().generates(), SeasonalStrength::Resting),
            (ruler.overcomes().overcomes().overcomes().overcomes(), SeasonalStrength::Confined),
            (ruler.overcomes(), SeasonalStrength::Dead),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generating_cycle_closes() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, Element::Wood);
    }

    #[test]
    fn overcoming_skips_one() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.overcomes(), e.generates().generates());
        }
    }

    #[test]
    fn spring_and_earth_seasons() {
        let label = |ruler: Element| {
            Element::seasonal_table(ruler)
                .iter()
                .map(|(e, s)| format!("{}{}", e.chinese(), s.chinese()))
                .collect::<Vec<_>>()
                .join(" ")
        };
        assert_eq!(label(Element::Wood), "木旺 火相 水休 金囚 土死");
        assert_eq!(label(Element::Fire), "火旺 土相 木休 水囚 金死");
        assert_eq!(label(Element::Earth), "土旺 金相 火休 木囚 水死");
        assert_eq!(label(Element::Water), "水旺 木相 金休 土囚 火死");
    }

    #[test]
    fn table_agrees_with_strength_under() {
        for ruler in ALL_ELEMENTS {
            for (e, s) in Element::seasonal_table(ruler) {
                assert_eq!(e.strength_under(ruler), s);
            }
        }
    }

    #[test]
    fn polarity_parity() {
        assert_eq!(Polarity::of_index(0), Polarity::Yang);
        assert_eq!(Polarity::of_index(7), Polarity::Yin);
    }
}
