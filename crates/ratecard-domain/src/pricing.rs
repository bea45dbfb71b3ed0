//! Pricing inputs, seniority and complexity tiers, and derived rates.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::common::CurrencyCode;

/// Seniority tier that scales the base hourly rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    #[default]
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
    ];

    /// Fixed lookup; there is no interpolation between tiers.
    pub fn multiplier(self) -> f64 {
        match self {
            ExperienceLevel::Junior => 1.0,
            ExperienceLevel::Mid => 1.5,
            ExperienceLevel::Senior => 2.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::Mid => "Mid-level",
            ExperienceLevel::Senior => "Senior",
        };
        f.write_str(label)
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "junior" => Ok(ExperienceLevel::Junior),
            "mid" | "intermediate" => Ok(ExperienceLevel::Mid),
            "senior" => Ok(ExperienceLevel::Senior),
            other => Err(format!(
                "unknown experience level `{}` (expected junior, mid or senior)",
                other
            )),
        }
    }
}

/// Estimated project difficulty used for project quotes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectComplexity {
    Low,
    #[default]
    Medium,
    High,
}

impl ProjectComplexity {
    pub const ALL: [ProjectComplexity; 3] = [
        ProjectComplexity::Low,
        ProjectComplexity::Medium,
        ProjectComplexity::High,
    ];

    pub fn multiplier(self) -> f64 {
        match self {
            ProjectComplexity::Low => 1.0,
            ProjectComplexity::Medium => 1.2,
            ProjectComplexity::High => 1.5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectComplexity::Low => "low",
            ProjectComplexity::Medium => "medium",
            ProjectComplexity::High => "high",
        }
    }
}

impl fmt::Display for ProjectComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectComplexity::Low => "Low",
            ProjectComplexity::Medium => "Medium",
            ProjectComplexity::High => "High",
        };
        f.write_str(label)
    }
}

impl FromStr for ProjectComplexity {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(ProjectComplexity::Low),
            "medium" => Ok(ProjectComplexity::Medium),
            "high" => Ok(ProjectComplexity::High),
            other => Err(format!(
                "unknown project complexity `{}` (expected low, medium or high)",
                other
            )),
        }
    }
}

/// Everything the pricing form captures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    #[serde(default)]
    pub name: String,
    pub experience_level: ExperienceLevel,
    /// Monthly fixed costs in `currency`.
    pub fixed_costs: f64,
    pub weekly_hours: f64,
    /// Percent, 0 to 100.
    pub profit_margin: f64,
    pub vacation_weeks: f64,
    /// Percent, strictly below 100.
    pub tax_rate: f64,
    #[serde(default)]
    pub currency: CurrencyCode,
    /// Days; fractional durations are allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_complexity: Option<ProjectComplexity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_factor: Option<f64>,
}

impl Default for PricingInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            experience_level: ExperienceLevel::Mid,
            fixed_costs: 1000.0,
            weekly_hours: 40.0,
            profit_margin: 30.0,
            vacation_weeks: 4.0,
            tax_rate: 20.0,
            currency: CurrencyCode::default(),
            project_duration: None,
            project_complexity: None,
            risk_factor: None,
        }
    }
}

impl PricingInput {
    pub fn new(name: impl Into<String>, currency: CurrencyCode) -> Self {
        Self {
            name: name.into(),
            currency,
            ..Self::default()
        }
    }

    /// Attaches project terms; a project rate is only derived when these are set.
    pub fn with_project(
        mut self,
        duration_days: f64,
        complexity: ProjectComplexity,
        risk_factor: f64,
    ) -> Self {
        self.project_duration = Some(duration_days);
        self.project_complexity = Some(complexity);
        self.risk_factor = Some(risk_factor);
        self
    }

    pub fn has_project(&self) -> bool {
        self.project_duration.is_some()
    }
}

/// Rates derived from a [`PricingInput`], all expressed in the input currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    #[serde(flatten)]
    pub input: PricingInput,
    pub hourly_rate: f64,
    pub daily_rate: f64,
    pub weekly_rate: f64,
    pub monthly_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_rate: Option<f64>,
}

impl PricingResult {
    /// Every derived figure, in display order.
    pub fn rates(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("hourly", Some(self.hourly_rate)),
            ("daily", Some(self.daily_rate)),
            ("weekly", Some(self.weekly_rate)),
            ("monthly", Some(self.monthly_rate)),
            ("project", self.project_rate),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_parse_case_insensitively() {
        assert_eq!("Senior".parse::<ExperienceLevel>(), Ok(ExperienceLevel::Senior));
        assert_eq!(" HIGH ".parse::<ProjectComplexity>(), Ok(ProjectComplexity::High));
        assert!("expert".parse::<ExperienceLevel>().is_err());
    }

    #[test]
    fn multipliers_are_ordered_by_tier() {
        let levels: Vec<f64> = ExperienceLevel::ALL.iter().map(|l| l.multiplier()).collect();
        assert_eq!(levels, vec![1.0, 1.5, 2.0]);
        let complexity: Vec<f64> = ProjectComplexity::ALL
            .iter()
            .map(|c| c.multiplier())
            .collect();
        assert_eq!(complexity, vec![1.0, 1.2, 1.5]);
    }

    #[test]
    fn input_uses_camel_case_field_names() {
        let input = PricingInput::new("Website", CurrencyCode::new("eur")).with_project(
            10.0,
            ProjectComplexity::Medium,
            15.0,
        );
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["fixedCosts"], 1000.0);
        assert_eq!(json["experienceLevel"], "mid");
        assert_eq!(json["currency"], "EUR");
        assert_eq!(json["projectComplexity"], "medium");
        assert_eq!(json["projectDuration"], 10.0);
    }

    #[test]
    fn optional_project_fields_are_omitted_when_absent() {
        let json = serde_json::to_value(PricingInput::default()).unwrap();
        assert!(json.get("projectDuration").is_none());
        assert!(json.get("riskFactor").is_none());
    }
}
