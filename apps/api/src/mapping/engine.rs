//! Attribute-to-asset mapping engine.
//!
//! Turns one submission's attributes into the ten-slot asset id sequence and
//! the display text record. Pure apart from the injected `RandomSource`.
//!
//! Draw order per call:
//! 1. match score in [60, 100]
//! 2. background seed in [1, 4]
//! 3. graduate layout index in 0..3 (only with a graduate institution)
//! 4. halo seed in [1, 4] (only on a graduate layout with a graduate institution)

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::mapping::random::RandomSource;
use crate::mapping::tables::{
    background_asset, field_asset, personality_asset, BOUND_AGE, BOUND_COUNTRY, BOUND_SALARY,
    FRAME_FIXED, HALO_EVEN, HALO_ODD, NO_HALO, TIER_34, TIER_51, TIER_86, TIER_91,
    UNIT_VARIANT_1, UNIT_VARIANT_2,
};

pub const SCORE_RANGE: (i64, i64) = (60, 100);
pub const SEED_RANGE: (i64, i64) = (1, 4);

// ────────────────────────────────────────────────────────────────────────────
// Input / output
// ────────────────────────────────────────────────────────────────────────────

/// One submission's attributes, already coerced by the adapter.
/// Numbers are unbounded; their canonical decimal form is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeInput {
    pub salary_expectation: BigInt,
    pub age: BigInt,
    pub nationality: String,
    pub personality_type: String,
    pub undergraduate_institution: String,
    pub graduate_institution: String,
    pub field_of_study: String,
}

impl AttributeInput {
    pub fn has_graduate_institution(&self) -> bool {
        !self.graduate_institution.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayText {
    pub salary_text: String,
    pub age_text: String,
    pub nationality_text: String,
    pub layout_id: String,
}

/// Engine result. `asset_ids` is positional; see `crate::session::view`
/// for the slot names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOutput {
    pub asset_ids: Vec<String>,
    pub display: DisplayText,
}

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Bachelor01,
    Master01,
    Master02,
    Master03,
}

pub const GRADUATE_LAYOUTS: [Layout; 3] = [Layout::Master01, Layout::Master02, Layout::Master03];

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Bachelor01 => "LAYOUT_B_01",
            Layout::Master01 => "LAYOUT_M_01",
            Layout::Master02 => "LAYOUT_M_02",
            Layout::Master03 => "LAYOUT_M_03",
        }
    }

    pub fn is_graduate(self) -> bool {
        !matches!(self, Layout::Bachelor01)
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rules
// ────────────────────────────────────────────────────────────────────────────

/// Maps a match score to its tier asset. Lower bounds are inclusive and
/// checked highest first.
///
/// Scores are only ever drawn from [60, 100], so the `JOB_34` arm cannot be
/// reached through `derive_card`. It is kept as-is.
pub fn match_tier(score: i64) -> &'static str {
    if score >= 90 {
        TIER_91
    } else if score >= 86 {
        TIER_86
    } else if score >= 50 {
        TIER_51
    } else {
        TIER_34
    }
}

/// Graduate institution present → one of the three graduate layouts,
/// otherwise the single undergraduate layout without consuming a draw.
pub fn select_layout(has_graduate: bool, rng: &mut impl RandomSource) -> Layout {
    if has_graduate {
        GRADUATE_LAYOUTS[rng.index_below(GRADUATE_LAYOUTS.len())]
    } else {
        Layout::Bachelor01
    }
}

/// Halo asset for slot 3. Draws a seed only when both the layout is a
/// graduate layout and the institution is non-blank.
pub fn halo_asset(
    layout: Layout,
    graduate_institution: &str,
    rng: &mut impl RandomSource,
) -> &'static str {
    if !layout.is_graduate() || graduate_institution.trim().is_empty() {
        return NO_HALO;
    }
    let seed = rng.int_in(SEED_RANGE.0, SEED_RANGE.1);
    if seed % 2 == 0 {
        HALO_EVEN
    } else {
        HALO_ODD
    }
}

/// Currency-unit asset for slot 6. `Master03` shares variant 1 with the
/// undergraduate layout.
pub fn unit_asset(layout: Layout) -> &'static str {
    match layout {
        Layout::Master01 | Layout::Master02 => UNIT_VARIANT_2,
        Layout::Master03 | Layout::Bachelor01 => UNIT_VARIANT_1,
    }
}

/// Derives the full card for one submission. Never fails.
pub fn derive_card(input: &AttributeInput, rng: &mut impl RandomSource) -> EngineOutput {
    let score = rng.int_in(SCORE_RANGE.0, SCORE_RANGE.1);
    let background_seed = rng.int_in(SEED_RANGE.0, SEED_RANGE.1);

    let layout = select_layout(input.has_graduate_institution(), rng);
    let halo = halo_asset(layout, &input.graduate_institution, rng);

    let asset_ids = vec![
        match_tier(score).to_string(),
        personality_asset(&input.personality_type).to_string(),
        background_asset(background_seed),
        halo.to_string(),
        FRAME_FIXED.to_string(),
        BOUND_SALARY.to_string(),
        unit_asset(layout).to_string(),
        BOUND_AGE.to_string(),
        BOUND_COUNTRY.to_string(),
        field_asset(&input.field_of_study).to_string(),
    ];

    EngineOutput {
        asset_ids,
        display: DisplayText {
            salary_text: input.salary_expectation.to_string(),
            age_text: input.age.to_string(),
            nationality_text: input.nationality.clone(),
            layout_id: layout.as_str().to_string(),
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
