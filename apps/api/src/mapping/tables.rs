//! Fixed asset identifiers and lookup tables.
//!
//! Identifiers are opaque; the front end resolves each one to an image file
//! of the same name.

pub const TIER_91: &str = "JOB_91";
pub const TIER_86: &str = "JOB_86";
pub const TIER_51: &str = "JOB_51";
pub const TIER_34: &str = "JOB_34";
pub const HALO_ODD: &str = "MASTER_1";
pub const HALO_EVEN: &str = "MASTER_2";
pub const NO_HALO: &str = "NONE_HALO";

pub const FRAME_FIXED: &str = "FRAME_FIXED";
pub const BOUND_SALARY: &str = "BOUND_SALARY";
pub const UNIT_VARIANT_1: &str = "UNIT_GBP1";
pub const UNIT_VARIANT_2: &str = "UNIT_GBP2";
pub const BOUND_AGE: &str = "BOUND_AGE";
pub const BOUND_COUNTRY: &str = "BOUND_COUNTRY";

pub const PERSONALITY_DEFAULT: &str = "MBTI_DEFAULT";
pub const FIELD_DEFAULT: &str = "MAJOR_DEFAULT";

const PERSONALITY_ASSETS: [(&str, &str); 16] = [
    ("ENTJ", "MBTI_ENTJ"),
    ("ENFJ", "MBTI_ENFJ"),
    ("ENFP", "MBTI_ENFP"),
    ("ENTP", "MBTI_ENTP"),
    ("ESFJ", "MBTI_ESFJ"),
    ("ESFP", "MBTI_ESFP"),
    ("ESTP", "MBTI_ESTP"),
    ("ESTJ", "MBTI_ESTJ"),
    ("INTJ", "MBTI_INTJ"),
    ("INFJ", "MBTI_INFJ"),
    ("INFP", "MBTI_INFP"),
    ("INTP", "MBTI_INTP"),
    ("ISFJ", "MBTI_ISFJ"),
    ("ISFP", "MBTI_ISFP"),
    ("ISTP", "MBTI_ISTP"),
    ("ISTJ", "MBTI_ISTJ"),
];

const FIELD_ASSETS: [(&str, &str); 6] = [
    ("Arts & Design", "MAJOR_ARTS"),
    ("STEM", "MAJOR_STEM"),
    ("Humanities", "MAJOR_HUMANITIES"),
    ("Business", "MAJOR_BUSINESS"),
    ("Law", "MAJOR_LAW"),
    ("Medicine", "MAJOR_MEDICINE"),
];

/// Case-insensitive personality lookup using full Unicode upper-casing, so
/// `"ıntj"` (dotless i) matches `INTJ`. Surrounding whitespace is not
/// stripped, so `" ENTJ"` misses.
pub fn personality_asset(code: &str) -> &'static str {
    let upper = code.to_uppercase();
    PERSONALITY_ASSETS
        .iter()
        .find(|(key, _)| *key == upper)
        .map(|(_, asset)| *asset)
        .unwrap_or(PERSONALITY_DEFAULT)
}

/// Exact-match field-of-study lookup.
pub fn field_asset(field: &str) -> &'static str {
    FIELD_ASSETS
        .iter()
        .find(|(key, _)| *key == field)
        .map(|(_, asset)| *asset)
        .unwrap_or(FIELD_DEFAULT)
}

/// Background id for a seed in `[1, 4]`.
pub fn background_asset(seed: i64) -> String {
    format!("BACHELOR_{seed}")
}
