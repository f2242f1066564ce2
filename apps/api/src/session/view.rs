use serde::Serialize;

use crate::mapping::EngineOutput;

/// Result page payload: positional asset ids unpacked into named slots,
/// plus the text record. Slot order matches `mapping::engine::derive_card`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub core_element_id: String,
    pub mbti_icon_id: String,
    pub background_uni_id: String,
    pub halo_uni_id: String,
    pub fixed_frame_id: String,
    pub bound_salary_id: String,
    pub unit_gbp_id: String,
    pub bound_age_id: String,
    pub bound_country_id: String,
    pub major_svg_id: String,
    pub salary_text: String,
    pub age_text: String,
    pub nationality_text: String,
    pub layout_id: String,
}

impl ResultView {
    /// Missing slots become empty strings; extra ids are ignored.
    pub fn from_output(output: &EngineOutput) -> Self {
        let slot = |i: usize| output.asset_ids.get(i).cloned().unwrap_or_default();
        Self {
            core_element_id: slot(0),
            mbti_icon_id: slot(1),
            background_uni_id: slot(2),
            halo_uni_id: slot(3),
            fixed_frame_id: slot(4),
            bound_salary_id: slot(5),
            unit_gbp_id: slot(6),
            bound_age_id: slot(7),
            bound_country_id: slot(8),
            major_svg_id: slot(9),
            salary_text: output.display.salary_text.clone(),
            age_text: output.display.age_text.clone(),
            nationality_text: output.display.nationality_text.clone(),
            layout_id: output.display.layout_id.clone(),
        }
    }
}
