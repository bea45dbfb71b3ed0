//! Field-level bounds checked before an input reaches the pricing engine.

use std::fmt;

use ratecard_domain::PricingInput;

pub const MAX_WEEKLY_HOURS: f64 = 168.0;
/// 52 vacation weeks would leave no working hours to spread costs over.
pub const MAX_VACATION_WEEKS: f64 = 51.0;

/// A single rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every rejected field of one input, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Returns the message recorded for `field`, if it was rejected.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    fn check_range(&mut self, field: &'static str, value: f64, min: f64, max: f64) {
        if !value.is_finite() || value < min || value > max {
            self.push(field, format!("must be between {} and {}", min, max));
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .errors
            .iter()
            .map(|error| format!("{} {}", error.field, error.message))
            .collect();
        f.write_str(&rendered.join("; "))
    }
}

/// Checks `input` against the form bounds, collecting every failure.
pub fn validate_input(input: &PricingInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if input.name.trim().is_empty() {
        errors.push("name", "is required");
    }
    if !input.fixed_costs.is_finite() || input.fixed_costs < 0.0 {
        errors.push("fixedCosts", "must be a non-negative amount");
    }
    errors.check_range("weeklyHours", input.weekly_hours, 1.0, MAX_WEEKLY_HOURS);
    errors.check_range("profitMargin", input.profit_margin, 0.0, 100.0);
    errors.check_range("vacationWeeks", input.vacation_weeks, 0.0, MAX_VACATION_WEEKS);
    if !input.tax_rate.is_finite() || input.tax_rate < 0.0 || input.tax_rate >= 100.0 {
        errors.push("taxRate", "must be at least 0 and below 100");
    }
    if !input.currency.is_well_formed() {
        errors.push("currency", "must be a three-letter currency code");
    }
    if let Some(days) = input.project_duration {
        if !days.is_finite() || days < 1.0 {
            errors.push("projectDuration", "must be at least 1 day");
        }
    }
    if let Some(risk) = input.risk_factor {
        errors.check_range("riskFactor", risk, 0.0, 100.0);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use ratecard_domain::{CurrencyCode, ProjectComplexity};

    use super::*;

    fn valid_input() -> PricingInput {
        PricingInput::new("Website", CurrencyCode::default())
    }

    #[test]
    fn form_defaults_are_valid() {
        assert!(validate_input(&valid_input()).is_ok());
        let with_project = valid_input().with_project(10.0, ProjectComplexity::Medium, 15.0);
        assert!(validate_input(&with_project).is_ok());
    }

    #[test]
    fn tax_rate_of_one_hundred_is_rejected() {
        let mut input = valid_input();
        input.tax_rate = 100.0;
        let errors = validate_input(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.message_for("taxRate").is_some());

        input.tax_rate = 99.99;
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn a_full_year_of_vacation_is_rejected() {
        let mut input = valid_input();
        input.vacation_weeks = 52.0;
        assert!(validate_input(&input)
            .unwrap_err()
            .message_for("vacationWeeks")
            .is_some());
    }

    #[test]
    fn every_failing_field_is_reported() {
        let mut input = valid_input();
        input.name = " ".into();
        input.fixed_costs = -1.0;
        input.weekly_hours = 0.0;
        input.profit_margin = f64::NAN;
        input.currency = CurrencyCode::new("dollars");
        input.project_duration = Some(0.5);
        input.risk_factor = Some(120.0);

        let errors = validate_input(&input).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|error| error.field).collect();
        assert_eq!(
            fields,
            vec![
                "name",
                "fixedCosts",
                "weeklyHours",
                "profitMargin",
                "currency",
                "projectDuration",
                "riskFactor"
            ]
        );
        assert!(errors.to_string().starts_with("name is required; "));
    }

    #[test]
    fn hour_bounds_are_inclusive() {
        let mut input = valid_input();
        input.weekly_hours = 168.0;
        assert!(validate_input(&input).is_ok());
        input.weekly_hours = 168.5;
        assert!(validate_input(&input).is_err());
    }
}
