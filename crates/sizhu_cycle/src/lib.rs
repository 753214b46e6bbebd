//! Sexagenary (ganzhi) cycle: stems, branches, pillars and the rules that
//! tie month and hour pillars to year and day stems.
//!
//! This crate provides:
//! - `HeavenlyStem` / `EarthlyBranch` with polarity and element
//! - `SexagenaryPillar`, legal by construction (equal polarity)
//! - five-tiger / five-rat rules and branch validity queries
//! - na-yin and xun-kong lookups
//! - chart relations: hidden stems, ten gods, the twelve life stages and
//!   seasonal strength
//!
//! Everything is `const` table data; nothing here can fail except parsing.

pub mod branch;
pub mod dun;
pub mod element;
pub mod error;
pub mod nayin;
pub mod pillar;
pub mod signature;
pub mod stem;
pub mod ten_god;
pub mod terrain;

pub use branch::{ALL_BRANCHES, EarthlyBranch, HiddenStems, MONTH_BRANCHES};
pub use dun::{
    DunRule, five_rat_start, five_tiger_start, hour_pillar, hour_table, is_valid_hour_pillar,
    is_valid_month_pillar, month_pillar, month_table, valid_branches_for,
};
pub use element::{ALL_ELEMENTS, Element, Polarity, SeasonalStrength};
pub use error::CycleError;
pub use nayin::NaYin;
pub use pillar::{SexagenaryPillar, is_valid_pairing, year_pillar_for};
pub use signature::FourPillarSignature;
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use ten_god::{ALL_TEN_GODS, TenGod};
pub use terrain::{ALL_TERRAINS, Terrain};
