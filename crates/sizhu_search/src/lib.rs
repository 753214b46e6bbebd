//! Four-pillar derivation and reverse search.
//!
//! This crate provides:
//! - `PillarDeriver` / `SolarTermCalendar` collaborator traits
//! - `TermBoundaryDeriver` and the mean-date `FixedTermCalendar`
//! - `PillarSearchEngine`: every civil bracket in a year window that
//!   derives to a given four-pillar signature
//! - `read_chart`: the forward path from civil time to a chart, with ten
//!   gods, hidden stems, life stages and seasonal strength

pub mod chart;
pub mod deriver;
pub mod error;
pub mod search;

pub use chart::{
    ChartReader, ChartReading, HiddenStemReading, PillarReading, read_chart, read_chart_at,
};
pub use deriver::{
    DayBoundary, FixedTermCalendar, PillarDeriver, SolarTermCalendar, TermBoundaryDeriver,
    day_pillar_for_day_number,
};
pub use error::SearchError;
pub use search::{
    CandidateMoment, PillarSearchEngine, SearchBounds, SearchWindow, parse_signature,
};
