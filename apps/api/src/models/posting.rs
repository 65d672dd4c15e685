use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::skill::{SkillRecord, SkillRequirement};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Draft,
    #[default]
    Active,
    Closed,
    Filled,
}

/// A job posting as supplied by the caller, carrying its skill requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub employer_id: Option<Uuid>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub is_remote: bool,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub requirements: Vec<SkillRequirement>,
}

impl JobPosting {
    pub fn is_active(&self) -> bool {
        self.status == JobStatus::Active
    }
}

/// A job seeker's profile as supplied by the caller, carrying its skill inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: Uuid,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
}

impl CandidateProfile {
    /// Hidden or unavailable profiles never appear in candidate rankings.
    pub fn is_discoverable(&self) -> bool {
        self.is_public && self.is_available
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_posting_defaults_to_active() {
        let job: JobPosting = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "title": "Backend Engineer"
        }))
        .unwrap();
        assert!(job.is_active());
        assert!(job.requirements.is_empty());
    }

    #[test]
    fn test_closed_posting_is_not_active() {
        let job: JobPosting = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "title": "Backend Engineer",
            "status": "closed"
        }))
        .unwrap();
        assert!(!job.is_active());
    }

    #[test]
    fn test_profile_discoverable_by_default() {
        let profile: CandidateProfile =
            serde_json::from_value(json!({ "id": Uuid::new_v4() })).unwrap();
        assert!(profile.is_discoverable());
    }

    #[test]
    fn test_unavailable_profile_not_discoverable() {
        let profile: CandidateProfile = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "is_available": false
        }))
        .unwrap();
        assert!(!profile.is_discoverable());
    }
}
