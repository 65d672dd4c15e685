pub mod posting;
pub mod skill;

pub use posting::{CandidateProfile, JobPosting};
pub use skill::{SkillLevel, SkillRecord, SkillRequirement};
