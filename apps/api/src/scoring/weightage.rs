use serde::{Deserialize, Serialize};

use crate::scoring::experience::ExperienceLevel;

/// Resume/test weight pair for one experience level. The two weights sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weightage {
    pub resume_weight: f64,
    pub test_weight: f64,
}

impl Weightage {
    /// Integer percentages for display.
    pub fn as_percentages(&self) -> WeightagePercent {
        WeightagePercent {
            resume_weight: (self.resume_weight * 100.0).round() as u32,
            test_weight: (self.test_weight * 100.0).round() as u32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightagePercent {
    pub resume_weight: u32,
    pub test_weight: u32,
}

/// Immutable level → weights table. Total over `ExperienceLevel`; unknown labels are
/// resolved to `Mid` before they reach here (see `ExperienceLevel::from_label`).
#[derive(Debug, Clone, PartialEq)]
pub struct WeightageConfig {
    pub entry: Weightage,
    pub mid: Weightage,
    pub senior: Weightage,
    pub lead: Weightage,
}

/// Entry-level hires are judged mostly on potential; senior hires mostly on demonstrated skill.
pub static STANDARD_WEIGHTAGE: WeightageConfig = WeightageConfig {
    entry: Weightage {
        resume_weight: 0.70,
        test_weight: 0.30,
    },
    mid: Weightage {
        resume_weight: 0.40,
        test_weight: 0.60,
    },
    senior: Weightage {
        resume_weight: 0.30,
        test_weight: 0.70,
    },
    lead: Weightage {
        resume_weight: 0.25,
        test_weight: 0.75,
    },
};

impl WeightageConfig {
    pub fn weights(&self, level: ExperienceLevel) -> Weightage {
        match level {
            ExperienceLevel::Entry => self.entry,
            ExperienceLevel::Mid => self.mid,
            ExperienceLevel::Senior => self.senior,
            ExperienceLevel::Lead => self.lead,
        }
    }
}

/// Rationale shown to recruiters next to the weights.
pub fn description(level: ExperienceLevel) -> &'static str {
    match level {
        ExperienceLevel::Entry => {
            "Entry-level: Higher weightage on resume/potential (70%) vs practical skills (30%)"
        }
        ExperienceLevel::Mid => {
            "Mid-level: Balanced evaluation with more emphasis on practical skills (60% test, 40% resume)"
        }
        ExperienceLevel::Senior => {
            "Senior-level: Strong emphasis on practical skills and problem-solving (70% test, 30% resume)"
        }
        ExperienceLevel::Lead => {
            "Lead-level: Maximum emphasis on practical skills and leadership capabilities (75% test, 25% resume)"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightageInfo {
    pub experience_level: ExperienceLevel,
    pub resume_weight: u32,
    pub test_weight: u32,
    pub description: &'static str,
}

pub fn weightage_info(config: &WeightageConfig, level: ExperienceLevel) -> WeightageInfo {
    let percent = config.weights(level).as_percentages();
    WeightageInfo {
        experience_level: level,
        resume_weight: percent.resume_weight,
        test_weight: percent.test_weight,
        description: description(level),
    }
}
