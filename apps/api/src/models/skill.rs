#![allow(dead_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// Candidate proficiency in a single skill.
///
/// Deserializes from any string. Labels outside the four known levels are kept
/// verbatim as `Unrecognized` so they can be echoed back; they score as intermediate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
    Unrecognized(String),
}

impl SkillLevel {
    pub fn as_str(&self) -> &str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
            SkillLevel::Unrecognized(label) => label,
        }
    }

    /// Beginner and intermediate are below the level a high-importance skill calls for.
    pub fn is_below_advanced(&self) -> bool {
        matches!(self, SkillLevel::Beginner | SkillLevel::Intermediate)
    }
}

impl From<&str> for SkillLevel {
    fn from(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "beginner" => SkillLevel::Beginner,
            "intermediate" => SkillLevel::Intermediate,
            "advanced" => SkillLevel::Advanced,
            "expert" => SkillLevel::Expert,
            _ => SkillLevel::Unrecognized(label.to_string()),
        }
    }
}

impl From<String> for SkillLevel {
    fn from(label: String) -> Self {
        SkillLevel::from(label.as_str())
    }
}

impl From<SkillLevel> for String {
    fn from(level: SkillLevel) -> Self {
        match level {
            SkillLevel::Unrecognized(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One weighted skill a job asks for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRequirement {
    #[serde(default)]
    pub skill_name: String,
    #[serde(default = "default_importance")]
    pub importance: f64, // relative weight, nominally (0, 1]
    #[serde(default = "default_required")]
    pub is_required: bool,
}

impl SkillRequirement {
    pub fn new(skill_name: impl Into<String>, importance: f64, is_required: bool) -> Self {
        Self {
            skill_name: skill_name.into(),
            importance,
            is_required,
        }
    }

    /// Lookup key, or `None` when the name is blank.
    pub fn key(&self) -> Option<String> {
        skill_key(&self.skill_name)
    }
}

/// One skill a candidate holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecord {
    #[serde(default)]
    pub skill_name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default)]
    pub years_experience: f64,
}

impl SkillRecord {
    pub fn new(skill_name: impl Into<String>, level: SkillLevel, years_experience: f64) -> Self {
        Self {
            skill_name: skill_name.into(),
            level,
            years_experience,
        }
    }

    /// Lookup key, or `None` when the name is blank.
    pub fn key(&self) -> Option<String> {
        skill_key(&self.skill_name)
    }
}

fn default_importance() -> f64 {
    1.0
}

fn default_required() -> bool {
    true
}

/// Case-insensitive identity for a skill name.
fn skill_key(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        None
    } else {
        Some(name.to_lowercase())
    }
}
