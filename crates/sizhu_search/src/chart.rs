//! Forward path: civil birth moment → adjusted moment → four pillars with
//! their na-yin, void branches and relations to the day stem.

use sizhu_cycle::{
    EarthlyBranch, Element, FourPillarSignature, HeavenlyStem, NaYin, SeasonalStrength,
    SexagenaryPillar, TenGod, Terrain,
};
use sizhu_solar::{AdjustFlags, GeoLocation, TrueSolarTimeAdjuster};
use sizhu_time::CalendarMoment;

use crate::deriver::{FixedTermCalendar, PillarDeriver, TermBoundaryDeriver};
use crate::error::SearchError;

/// A stem hidden in a pillar's branch and its ten god.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenStemReading {
    pub stem: HeavenlyStem,
    pub ten_god: TenGod,
}

/// One pillar with its derived attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct PillarReading {
    pub pillar: SexagenaryPillar,
    pub na_yin: NaYin,
    /// Void branches of the pillar's decade.
    pub xun_kong: [EarthlyBranch; 2],
    pub stem_element: Element,
    pub branch_element: Element,
    /// Ten god of the stem. `None` for the day pillar, whose stem is the
    /// day master.
    pub ten_god: Option<TenGod>,
    /// Hidden stems of the branch, main qi first.
    pub hidden_stems: Vec<HiddenStemReading>,
    /// Life stage of the day stem on this branch.
    pub star_luck: Terrain,
    /// Life stage of this pillar's own stem on its branch.
    pub self_seat: Terrain,
}

impl PillarReading {
    /// Attributes of `pillar` seen from `day_stem`.
    pub fn new(pillar: SexagenaryPillar, day_stem: HeavenlyStem) -> Self {
        let (stem, branch) = (pillar.stem(), pillar.branch());
        Self {
            pillar,
            na_yin: pillar.na_yin(),
            xun_kong: pillar.xun_kong(),
            stem_element: stem.element(),
            branch_element: branch.element(),
            ten_god: Some(day_stem.ten_god(stem)),
            hidden_stems: branch
                .hidden_stems()
                .iter()
                .map(|stem| HiddenStemReading {
                    stem,
                    ten_god: day_stem.ten_god(stem),
                })
                .collect(),
            star_luck: day_stem.terrain(branch),
            self_seat: stem.terrain(branch),
        }
    }

    /// Reading of the day pillar itself.
    pub fn day_master(pillar: SexagenaryPillar) -> Self {
        Self {
            ten_god: None,
            ..Self::new(pillar, pillar.stem())
        }
    }
}

/// A full chart reading.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartReading {
    /// Moment as entered.
    pub civil: CalendarMoment,
    /// Moment after the enabled adjustments; pillars are derived from this.
    pub adjusted: CalendarMoment,
    pub signature: FourPillarSignature,
    /// Year, month, day, hour.
    pub pillars: [PillarReading; 4],
    /// Fetal origin (taiyuan), from the month pillar.
    pub fetal_origin: SexagenaryPillar,
    /// Strength of each element in the month branch's season, 旺 first.
    pub seasonal: [(Element, SeasonalStrength); 5],
}

impl ChartReading {
    fn from_signature(civil: CalendarMoment, adjusted: CalendarMoment, signature: FourPillarSignature) -> Self {
        let day_stem = signature.day.stem();
        let reading = |p| PillarReading::new(p, day_stem);
        Self {
            civil,
            adjusted,
            signature,
            pillars: [
                reading(signature.year),
                reading(signature.month),
                PillarReading::day_master(signature.day),
                reading(signature.hour),
            ],
            fetal_origin: signature.month.fetal_origin(),
            seasonal: Element::seasonal_table(signature.month.branch().element()),
        }
    }

    /// The day stem, against which ten gods and star luck are read.
    pub fn day_master(&self) -> HeavenlyStem {
        self.signature.day.stem()
    }
}

/// Adjusts moments and derives pillars.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartReader<D> {
    deriver: D,
    adjuster: TrueSolarTimeAdjuster,
}

impl Default for ChartReader<TermBoundaryDeriver<FixedTermCalendar>> {
    fn default() -> Self {
        Self::new(
            TermBoundaryDeriver::new(FixedTermCalendar),
            TrueSolarTimeAdjuster::default(),
        )
    }
}

impl<D: PillarDeriver> ChartReader<D> {
    pub fn new(deriver: D, adjuster: TrueSolarTimeAdjuster) -> Self {
        Self { deriver, adjuster }
    }

    pub fn read(
        &self,
        moment: &CalendarMoment,
        location: &GeoLocation,
        flags: AdjustFlags,
    ) -> ChartReading {
        let adjusted = self.adjuster.adjust(moment, location, flags);
        let signature = self.deriver.derive_pillars(&adjusted);
        ChartReading::from_signature(*moment, adjusted, signature)
    }

    /// [`read`](Self::read) from raw coordinates, validating them first.
    pub fn read_at(
        &self,
        moment: &CalendarMoment,
        longitude_deg: f64,
        latitude_deg: f64,
        flags: AdjustFlags,
    ) -> Result<ChartReading, SearchError> {
        let location = GeoLocation::new(longitude_deg, latitude_deg)?;
        Ok(self.read(moment, &location, flags))
    }
}

/// Read a chart with the mean-date term calendar and default solar config.
pub fn read_chart(moment: &CalendarMoment, location: &GeoLocation, flags: AdjustFlags) -> ChartReading {
    ChartReader::default().read(moment, location, flags)
}

/// [`read_chart`] from raw coordinates.
pub fn read_chart_at(
    moment: &CalendarMoment,
    longitude_deg: f64,
    latitude_deg: f64,
    flags: AdjustFlags,
) -> Result<ChartReading, SearchError> {
    ChartReader::default().read_at(moment, longitude_deg, latitude_deg, flags)
}

#[cfg(test)]
mod tests {
    use sizhu_solar::SolarError;

    use super::*;

    fn noon_feb_10() -> ChartReading {
        let t = CalendarMoment::new(2024, 2, 10, 12, 0, 0.0).unwrap();
        let loc = GeoLocation::new(116.4, 39.9).unwrap();
        read_chart(&t, &loc, AdjustFlags::default())
    }

    #[test]
    fn plain_reading_uses_civil_time() {
        let r = noon_feb_10();
        assert_eq!(r.adjusted, r.civil);
        assert_eq!(r.signature.to_string(), "甲辰 丙寅 甲辰 庚午");
        assert_eq!(r.pillars[0].na_yin.name(), "覆灯火");
        assert_eq!(r.pillars[2].xun_kong, [EarthlyBranch::Yin, EarthlyBranch::Mao]);
        assert_eq!(r.fetal_origin.name(), "丁巳");
    }

    #[test]
    fn ten_gods_against_the_day_stem() {
        let r = noon_feb_10();
        assert_eq!(r.day_master(), HeavenlyStem::Jia);
        let gods: Vec<_> = r.pillars.iter().map(|p| p.ten_god).collect();
        assert_eq!(
            gods,
            vec![
                Some(TenGod::Companion),
                Some(TenGod::EatingGod),
                None,
                Some(TenGod::SevenKillings),
            ]
        );
    }

    #[test]
    fn hidden_stems_carry_their_ten_gods() {
        let r = noon_feb_10();
        // 寅 holds 甲 丙 戊
        let month: Vec<_> = r.pillars[1]
            .hidden_stems
            .iter()
            .map(|h| (h.stem.chinese(), h.ten_god))
            .collect();
        assert_eq!(
            month,
            vec![
                ('甲', TenGod::Companion),
                ('丙', TenGod::EatingGod),
                ('戊', TenGod::IndirectWealth),
            ]
        );
        // 午 holds 丁 己; the day pillar still lists its hidden stems
        let hour: Vec<_> = r.pillars[3].hidden_stems.iter().map(|h| h.ten_god).collect();
        assert_eq!(hour, vec![TenGod::HurtingOfficer, TenGod::DirectWealth]);
        assert_eq!(r.pillars[2].hidden_stems.len(), 3);
    }

    #[test]
    fn star_luck_and_self_seat() {
        let r = noon_feb_10();
        // 甲 on 辰 寅 辰 午
        let luck: Vec<_> = r.pillars.iter().map(|p| p.star_luck).collect();
        assert_eq!(luck, vec![Terrain::Decline, Terrain::Office, Terrain::Decline, Terrain::Death]);
        // 丙 on 寅, 庚 on 午
        assert_eq!(r.pillars[1].self_seat, Terrain::Birth);
        assert_eq!(r.pillars[3].self_seat, Terrain::Bathing);
        assert_eq!(r.pillars[2].self_seat, r.pillars[2].star_luck);
    }

    #[test]
    fn seasonal_strength_follows_the_month_branch() {
        let text: Vec<String> = noon_feb_10()
            .seasonal
            .iter()
            .map(|(e, s)| format!("{}{}", e.chinese(), s.chinese()))
            .collect();
        assert_eq!(text, ["木旺", "火相", "水休", "金囚", "土死"]);
    }

    #[test]
    fn true_solar_time_can_change_the_hour_pillar() {
        // 11:10 civil at 100°E is 09:50 mean solar, plus about −14 min EoT
        let t = CalendarMoment::new(2024, 2, 10, 11, 10, 0.0).unwrap();
        let loc = GeoLocation::new(100.0, 30.0).unwrap();
        let civil = read_chart(&t, &loc, AdjustFlags::default());
        let solar = read_chart(
            &t,
            &loc,
            AdjustFlags {
                apply_true_solar: true,
                ..AdjustFlags::default()
            },
        );
        assert_eq!(civil.signature.hour.branch(), EarthlyBranch::Wu);
        assert_eq!(solar.signature.hour.branch(), EarthlyBranch::Si);
        assert_eq!(solar.adjusted.hour(), 9);
    }

    #[test]
    fn raw_coordinates_are_validated() {
        let t = CalendarMoment::new(2024, 2, 10, 12, 0, 0.0).unwrap();
        let err = read_chart_at(&t, 116.4, 95.0, AdjustFlags::default()).unwrap_err();
        assert!(matches!(err, SearchError::Solar(SolarError::InvalidLocation(_))));
        assert!(err.to_string().contains("latitude 95"));

        let ok = read_chart_at(&t, 116.4, 39.9, AdjustFlags::default()).unwrap();
        assert_eq!(ok, noon_feb_10());
    }
}
