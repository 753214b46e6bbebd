//! Four-pillar signature: year, month, day and hour pillars together.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::CycleError;
use crate::pillar::SexagenaryPillar;

/// The four pillars of one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillarSignature {
    pub year: SexagenaryPillar,
    pub month: SexagenaryPillar,
    pub day: SexagenaryPillar,
    pub hour: SexagenaryPillar,
}

impl FourPillarSignature {
    pub const fn new(
        year: SexagenaryPillar,
        month: SexagenaryPillar,
        day: SexagenaryPillar,
        hour: SexagenaryPillar,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [SexagenaryPillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

impl Display for FourPillarSignature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

impl FromStr for FourPillarSignature {
    type Err = CycleError;

    /// Parse four whitespace-separated pillars, e.g. `甲子 丙寅 甲子 甲子`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [year, month, day, hour] = parts.as_slice() else {
            return Err(CycleError::InvalidSignature {
                input: s.to_string(),
                reason: "expected four pillars",
            });
        };
        Ok(Self {
            year: year.parse()?,
            month: month.parse()?,
            day: day.parse()?,
            hour: hour.parse()?,
        })
    }
}
