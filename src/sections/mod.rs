//! Password analysis sections
//!
//! Each section analyzes a specific aspect of password strength and
//! returns its part of the assessment.

mod crack_time;
mod entropy;
mod pattern;
mod requirements;
mod variety;

pub use crack_time::crack_time_section;
pub use entropy::entropy_section;
pub use pattern::pattern_analysis_section;
pub use requirements::requirements_section;
pub use variety::character_variety_section;
