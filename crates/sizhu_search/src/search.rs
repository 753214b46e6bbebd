//! Reverse search: every civil bracket in a year window whose derived
//! four pillars equal a query.
//!
//! The space is each two-hour bracket, sampled at its representative even
//! hour, of each day of each year in the window. Years the deriver rules
//! out are skipped whole; everything else is enumerate-and-filter.

use sizhu_cycle::{ALL_BRANCHES, EarthlyBranch, FourPillarSignature, SexagenaryPillar};
use sizhu_time::{CalendarMoment, days_in_month, is_valid_date};
use tracing::{debug, trace};

use crate::deriver::{FixedTermCalendar, PillarDeriver, TermBoundaryDeriver};
use crate::error::SearchError;

/// Years scanned between progress reports.
const CHUNK_YEARS: u32 = 10;

/// Outer year limits the engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchBounds {
    /// Earliest searchable year. Default: 1901.
    pub min_year: i32,
    /// Latest searchable year. Default: 2099.
    pub max_year: i32,
}

impl Default for SearchBounds {
    fn default() -> Self {
        Self {
            min_year: 1901,
            max_year: 2099,
        }
    }
}

impl SearchBounds {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.min_year > self.max_year {
            return Err("min_year must not exceed max_year");
        }
        Ok(())
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}

/// Inclusive range of civil years to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchWindow {
    pub start_year: i32,
    pub end_year: i32,
}

impl SearchWindow {
    pub const fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year,
            end_year,
        }
    }

    /// Number of years covered; 0 when inverted.
    pub fn len(&self) -> u32 {
        if self.end_year < self.start_year {
            0
        } else {
            self.end_year.abs_diff(self.start_year) + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start_year..=self.end_year
    }

    /// Consecutive sub-windows of at most `years` years, in order. Lets
    /// callers spread a search over threads or stop between chunks.
    pub fn chunks(&self, years: u32) -> impl Iterator<Item = SearchWindow> {
        let step = i64::from(years.max(1));
        let end = i64::from(self.end_year);
        let mut next = i64::from(self.start_year);
        std::iter::from_fn(move || {
            if next > end {
                return None;
            }
            let last = (next + step - 1).min(end);
            let chunk = SearchWindow::new(next as i32, last as i32);
            next = last + 1;
            Some(chunk)
        })
    }
}

/// One search hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateMoment {
    /// Civil moment at the bracket's representative even hour.
    pub moment: CalendarMoment,
    /// Pillars derived for `moment`; equal to the query.
    pub signature: FourPillarSignature,
}

impl CandidateMoment {
    pub fn hour_branch(&self) -> EarthlyBranch {
        self.signature.hour.branch()
    }

    /// Bracket label with the sampled time, e.g. `子 (23:00-01:00) → 00:00`.
    pub fn hour_label(&self) -> String {
        format!(
            "{} → {:02}:{:02}",
            self.hour_branch().bracket_label(),
            self.moment.hour(),
            self.moment.minute()
        )
    }
}

/// Parse four pillar names into a query, reporting which field failed.
pub fn parse_signature(
    year: &str,
    month: &str,
    day: &str,
    hour: &str,
) -> Result<FourPillarSignature, SearchError> {
    let parse = |field: &'static str, text: &str| {
        text.parse::<SexagenaryPillar>()
            .map_err(|e| SearchError::invalid(field, e.to_string()))
    };
    Ok(FourPillarSignature::new(
        parse("year_pillar", year)?,
        parse("month_pillar", month)?,
        parse("day_pillar", day)?,
        parse("hour_pillar", hour)?,
    ))
}

/// Enumerate-and-filter search over a [`PillarDeriver`].
#[derive(Debug, Clone, PartialEq)]
pub struct PillarSearchEngine<D> {
    deriver: D,
    bounds: SearchBounds,
}

impl Default for PillarSearchEngine<TermBoundaryDeriver<FixedTermCalendar>> {
    fn default() -> Self {
        Self::new(TermBoundaryDeriver::new(FixedTermCalendar))
    }
}

impl<D: PillarDeriver> PillarSearchEngine<D> {
    pub fn new(deriver: D) -> Self {
        Self {
            deriver,
            bounds: SearchBounds::default(),
        }
    }

    /// Replace the outer year limits.
    pub fn with_bounds(mut self, bounds: SearchBounds) -> Result<Self, SearchError> {
        bounds
            .validate()
            .map_err(|reason| SearchError::invalid("bounds", reason))?;
        self.bounds = bounds;
        Ok(self)
    }

    pub fn deriver(&self) -> &D {
        &self.deriver
    }

    pub fn bounds(&self) -> &SearchBounds {
        &self.bounds
    }

    /// Check a window against ordering and the engine bounds.
    pub fn validate_window(&self, window: &SearchWindow) -> Result<(), SearchError> {
        if window.start_year > window.end_year {
            return Err(SearchError::invalid(
                "window",
                format!(
                    "start year {} is after end year {}",
                    window.start_year, window.end_year
                ),
            ));
        }
        if !self.bounds.contains(window.start_year) {
            return Err(SearchError::invalid(
                "start_year",
                format!(
                    "{} outside {}..={}",
                    window.start_year, self.bounds.min_year, self.bounds.max_year
                ),
            ));
        }
        if !self.bounds.contains(window.end_year) {
            return Err(SearchError::invalid(
                "end_year",
                format!(
                    "{} outside {}..={}",
                    window.end_year, self.bounds.min_year, self.bounds.max_year
                ),
            ));
        }
        Ok(())
    }

    /// Every bracket in `window` whose pillars equal `signature`, in
    /// ascending order. An empty result is not an error.
    pub fn search(
        &self,
        signature: &FourPillarSignature,
        window: SearchWindow,
    ) -> Result<Vec<CandidateMoment>, SearchError> {
        self.search_with(signature, window, |_| true)
    }

    /// Like [`search`](Self::search), asking `should_continue(year)` before
    /// each year. When it answers `false` the hits so far are returned.
    pub fn search_with<F>(
        &self,
        signature: &FourPillarSignature,
        window: SearchWindow,
        mut should_continue: F,
    ) -> Result<Vec<CandidateMoment>, SearchError>
    where
        F: FnMut(i32) -> bool,
    {
        self.validate_window(&window)?;
        debug!(%signature, start = window.start_year, end = window.end_year, "pillar search");

        let mut hits = Vec::new();
        for chunk in window.chunks(CHUNK_YEARS) {
            for year in chunk.years() {
                if !should_continue(year) {
                    debug!(year, found = hits.len(), "pillar search stopped");
                    return Ok(hits);
                }
                if !self.deriver.may_match_year(year, signature) {
                    trace!(year, "year skipped");
                    continue;
                }
                self.scan_year(year, signature, &mut hits)?;
            }
            debug!(
                start = chunk.start_year,
                end = chunk.end_year,
                found = hits.len(),
                "chunk done"
            );
        }
        debug!(found = hits.len(), "pillar search complete");
        Ok(hits)
    }

    /// Parse pillar names and search.
    pub fn search_names(
        &self,
        year: &str,
        month: &str,
        day: &str,
        hour: &str,
        window: SearchWindow,
    ) -> Result<Vec<CandidateMoment>, SearchError> {
        let signature = parse_signature(year, month, day, hour)?;
        self.search(&signature, window)
    }

    fn scan_year(
        &self,
        year: i32,
        signature: &FourPillarSignature,
        hits: &mut Vec<CandidateMoment>,
    ) -> Result<(), SearchError> {
        for month in 1..=12 {
            for day in 1..=days_in_month(year, month) {
                if !is_valid_date(year, month, day) {
                    continue;
                }
                for branch in ALL_BRANCHES {
                    let moment =
                        CalendarMoment::new(year, month, day, branch.representative_hour(), 0, 0.0)?;
                    let derived = self.deriver.derive_pillars(&moment);
                    if derived == *signature {
                        hits.push(CandidateMoment {
                            moment,
                            signature: derived,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds() {
        let b = SearchBounds::default();
        assert_eq!((b.min_year, b.max_year), (1901, 2099));
        assert!(b.validate().is_ok());
        assert!(SearchBounds { min_year: 2000, max_year: 1999 }.validate().is_err());
    }

    #[test]
    fn chunks_cover_window_in_order() {
        let w = SearchWindow::new(1901, 1925);
        let chunks: Vec<_> = w.chunks(10).collect();
        assert_eq!(
            chunks,
            vec![
                SearchWindow::new(1901, 1910),
                SearchWindow::new(1911, 1920),
                SearchWindow::new(1921, 1925),
            ]
        );
        assert_eq!(w.len(), 25);
    }

    #[test]
    fn chunk_of_zero_years_is_one_year() {
        let chunks: Vec<_> = SearchWindow::new(2000, 2002).chunks(0).collect();
        assert_eq!(chunks.len(), 3);
    }

    #[test]
    fn inverted_window_is_empty() {
        let w = SearchWindow::new(2000, 1999);
        assert!(w.is_empty());
        assert_eq!(w.chunks(5).count(), 0);
    }

    #[test]
    fn parse_signature_names_the_field() {
        let err = parse_signature("甲子", "丙丑", "甲子", "甲子").unwrap_err();
        match err {
            SearchError::InvalidSearchParameters { field, .. } => assert_eq!(field, "month_pillar"),
            other => panic!("unexpected {other:?}"),
        }
        let err = parse_signature("甲子", "丙寅", "甲子", "x").unwrap_err();
        assert!(err.to_string().contains("hour_pillar"));
    }

    #[test]
    fn window_validation() {
        let engine = PillarSearchEngine::default();
        assert!(engine.validate_window(&SearchWindow::new(1901, 2099)).is_ok());
        let err = engine.validate_window(&SearchWindow::new(1900, 1950)).unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidSearchParameters { field: "start_year", .. }
        ));
        let err = engine.validate_window(&SearchWindow::new(2000, 2100)).unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidSearchParameters { field: "end_year", .. }
        ));
    }

    #[test]
    fn custom_bounds() {
        let engine = PillarSearchEngine::default()
            .with_bounds(SearchBounds { min_year: 1800, max_year: 2200 })
            .unwrap();
        assert!(engine.validate_window(&SearchWindow::new(1850, 2150)).is_ok());
        assert!(PillarSearchEngine::default()
            .with_bounds(SearchBounds { min_year: 10, max_year: 5 })
            .is_err());
    }
}
