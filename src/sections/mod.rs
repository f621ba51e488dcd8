//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password strength and
//! returns its score contribution; the evaluator adds them up.

mod length;
mod pattern;
mod variety;

pub use length::{length_section, LengthAssessment};
pub use pattern::pattern_section;
pub use variety::{variety_section, VarietyAssessment};
