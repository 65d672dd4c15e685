use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::matching::scorer::match_score;
use crate::matching::skill_value::ScoringWeights;
use crate::models::{SkillLevel, SkillRecord, SkillRequirement};

/// A requirement the candidate holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedSkill {
    pub skill: String,
    pub required_importance: f64,
    pub is_required: bool,
    pub candidate_level: SkillLevel,
    pub candidate_experience: f64,
}

/// A requirement the candidate lacks entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingSkill {
    pub skill: String,
    pub importance: f64,
    pub is_required: bool,
}

/// A high-importance skill the candidate holds below advanced level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementArea {
    pub skill: String,
    pub current_level: SkillLevel,
    pub suggested_level: SkillLevel,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GapReport {
    pub matched: Vec<MatchedSkill>,
    pub missing: Vec<MissingSkill>,
    pub improvement_areas: Vec<ImprovementArea>,
    pub match_score: f64,
}

/// Classifies every requirement as matched or missing and flags under-leveled
/// high-importance matches. Requirements are reported in input order.
///
/// Blank names and non-finite importance are skipped and negative importance
/// reads as 0, the same cleaning `match_score` applies.
pub fn skill_gap(
    requirements: &[SkillRequirement],
    candidate_skills: &[SkillRecord],
    weights: &ScoringWeights,
) -> GapReport {
    let mut by_name: HashMap<String, &SkillRecord> = HashMap::with_capacity(candidate_skills.len());
    for record in candidate_skills {
        if let Some(key) = record.key() {
            by_name.insert(key, record);
        }
    }

    let mut report = GapReport::default();

    for req in requirements {
        let Some(key) = req.key() else {
            continue;
        };
        if !req.importance.is_finite() {
            continue;
        }
        let importance = req.importance.max(0.0);

        match by_name.get(&key) {
            Some(record) => {
                report.matched.push(MatchedSkill {
                    skill: req.skill_name.clone(),
                    required_importance: importance,
                    is_required: req.is_required,
                    candidate_level: record.level.clone(),
                    candidate_experience: record.years_experience,
                });

                if importance >= weights.improvement_importance
                    && record.level.is_below_advanced()
                {
                    report.improvement_areas.push(ImprovementArea {
                        skill: req.skill_name.clone(),
                        current_level: record.level.clone(),
                        suggested_level: SkillLevel::Advanced,
                    });
                }
            }
            None => report.missing.push(MissingSkill {
                skill: req.skill_name.clone(),
                importance,
                is_required: req.is_required,
            }),
        }
    }

    report.match_score = match_score(requirements, candidate_skills, weights);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_python_matched_sql_missing_python_flagged() {
        let w = ScoringWeights::default();
        let requirements = vec![
            SkillRequirement::new("Python", 0.9, true),
            SkillRequirement::new("SQL", 0.3, false),
        ];
        let skills = vec![SkillRecord::new("python", SkillLevel::Intermediate, 0.0)];

        let report = skill_gap(&requirements, &skills, &w);

        assert_eq!(report.matched.len(), 1);
        assert_eq!(report.matched[0].skill, "Python");
        assert_eq!(report.matched[0].candidate_level, SkillLevel::Intermediate);

        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].skill, "SQL");
        assert!(!report.missing[0].is_required);

        assert_eq!(report.improvement_areas.len(), 1);
        assert_eq!(report.improvement_areas[0].skill, "Python");
        assert_eq!(report.improvement_areas[0].suggested_level, SkillLevel::Advanced);

        // 0.9 × (1.0 / 2.5) / 1.2
        assert_eq!(report.match_score, 0.3);
    }

    #[test]
    fn test_low_importance_skill_not_flagged() {
        let w = ScoringWeights::default();
        let report = skill_gap(
            &[SkillRequirement::new("Docker", 0.5, true)],
            &[SkillRecord::new("Docker", SkillLevel::Beginner, 0.5)],
            &w,
        );
        assert_eq!(report.matched.len(), 1);
        assert!(report.improvement_areas.is_empty());
    }

    #[test]
    fn test_advanced_skill_not_flagged() {
        let w = ScoringWeights::default();
        let report = skill_gap(
            &[SkillRequirement::new("Rust", 1.0, true)],
            &[SkillRecord::new("Rust", SkillLevel::Advanced, 2.0)],
            &w,
        );
        assert!(report.improvement_areas.is_empty());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let w = ScoringWeights::default();
        let report = skill_gap(
            &[SkillRequirement::new("Rust", 0.8, true)],
            &[SkillRecord::new("Rust", SkillLevel::Beginner, 0.0)],
            &w,
        );
        assert_eq!(report.improvement_areas.len(), 1);
    }

    #[test]
    fn test_empty_inputs_give_empty_report() {
        let w = ScoringWeights::default();
        let report = skill_gap(&[], &[], &w);
        assert!(report.matched.is_empty());
        assert!(report.missing.is_empty());
        assert!(report.improvement_areas.is_empty());
        assert_eq!(report.match_score, 0.0);
    }

    #[test]
    fn test_blank_requirement_skipped() {
        let w = ScoringWeights::default();
        let report = skill_gap(
            &[
                SkillRequirement::new("", 1.0, true),
                SkillRequirement::new("Go", 0.4, false),
            ],
            &[],
            &w,
        );
        assert!(report.matched.is_empty());
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].skill, "Go");
    }

    #[test]
    fn test_invalid_importance_cleaned_like_scorer() {
        let w = ScoringWeights::default();
        let report = skill_gap(
            &[
                SkillRequirement::new("Rust", f64::NAN, true),
                SkillRequirement::new("Go", f64::INFINITY, false),
                SkillRequirement::new("SQL", -0.4, false),
                SkillRequirement::new("Kafka", -1.0, true),
            ],
            &[
                SkillRecord::new("Rust", SkillLevel::Beginner, 0.0),
                SkillRecord::new("SQL", SkillLevel::Beginner, 0.0),
            ],
            &w,
        );

        assert_eq!(report.matched.len(), 1);
        assert_eq!(report.matched[0].skill, "SQL");
        assert_eq!(report.matched[0].required_importance, 0.0);
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].skill, "Kafka");
        assert_eq!(report.missing[0].importance, 0.0);
        assert!(report.improvement_areas.is_empty());
        assert_eq!(report.match_score, 0.0);
    }

    #[test]
    fn test_report_serializes_levels_as_strings() {
        let w = ScoringWeights::default();
        let report = skill_gap(
            &[SkillRequirement::new("Rust", 0.9, true)],
            &[SkillRecord::new("Rust", SkillLevel::Beginner, 1.0)],
            &w,
        );
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["improvement_areas"][0]["current_level"], json!("beginner"));
        assert_eq!(value["improvement_areas"][0]["suggested_level"], json!("advanced"));
    }
}
