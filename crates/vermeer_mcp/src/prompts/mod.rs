//! System prompt templates for the vision tools.
//!
//! One instruction template per tool, selected once per call and sent as the
//! system turn ahead of the image blocks. Templates are static; per-call
//! hints are spliced into the user prompt by the tool adapters instead.

mod data_viz;
mod diagram_analysis;
mod error_diagnosis;
mod general_image;
mod text_extraction;
mod ui_diff;
mod ui_to_artifact;

pub use data_viz::DATA_VIZ_ANALYSIS_PROMPT;
pub use diagram_analysis::DIAGRAM_UNDERSTANDING_PROMPT;
pub use error_diagnosis::ERROR_DIAGNOSIS_PROMPT;
pub use general_image::GENERAL_IMAGE_ANALYSIS_PROMPT;
pub use text_extraction::TEXT_EXTRACTION_PROMPT;
pub use ui_diff::UI_DIFF_CHECK_PROMPT;
pub use ui_to_artifact::{
    ui_to_artifact_prompt, UI_TO_ARTIFACT_CODE, UI_TO_ARTIFACT_DESCRIPTION, UI_TO_ARTIFACT_PROMPT,
    UI_TO_ARTIFACT_SPEC,
};
