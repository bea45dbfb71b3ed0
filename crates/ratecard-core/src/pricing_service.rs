//! Deterministic rate derivation from a pricing input.

use ratecard_domain::{PricingInput, PricingResult, ProjectComplexity};

use crate::{validation::validate_input, CoreError};

pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
/// Billing conventions; independent of the weekly hours the user works.
pub const HOURS_PER_DAY: f64 = 8.0;
pub const DAYS_PER_WEEK: f64 = 5.0;
pub const WEEKS_PER_MONTH: f64 = 4.0;
/// Applied when a project duration arrives without a complexity tier.
pub const FALLBACK_PROJECT_COMPLEXITY: ProjectComplexity = ProjectComplexity::High;

/// Pure pricing functions. No state, no I/O, no rounding.
pub struct PricingService;

impl PricingService {
    /// Validates `input` and derives its rates.
    pub fn price(input: PricingInput) -> Result<PricingResult, CoreError> {
        validate_input(&input)?;
        Ok(Self::compute_rates(input))
    }

    /// Derives hourly, daily, weekly, monthly and optional project rates.
    ///
    /// Callers guarantee `tax_rate < 100` and a positive working year; the
    /// result is non-finite otherwise.
    pub fn compute_rates(input: PricingInput) -> PricingResult {
        let working_weeks = WEEKS_PER_YEAR - input.vacation_weeks;
        let total_yearly_hours = input.weekly_hours * working_weeks;
        let experience_multiplier = input.experience_level.multiplier();

        let yearly_expenses = input.fixed_costs * MONTHS_PER_YEAR;
        let base_hourly_rate = yearly_expenses / total_yearly_hours;

        let profit_multiplier = 1.0 + input.profit_margin / 100.0;
        let mut hourly_rate = base_hourly_rate * profit_multiplier * experience_multiplier;

        // Gross up so the net after tax matches the target.
        hourly_rate /= 1.0 - input.tax_rate / 100.0;

        let daily_rate = hourly_rate * HOURS_PER_DAY;
        let weekly_rate = daily_rate * DAYS_PER_WEEK;
        let monthly_rate = weekly_rate * WEEKS_PER_MONTH;

        let project_rate = input.project_duration.map(|days| {
            let complexity_multiplier = input
                .project_complexity
                .unwrap_or(FALLBACK_PROJECT_COMPLEXITY)
                .multiplier();
            let risk_multiplier = 1.0 + input.risk_factor.unwrap_or(0.0) / 100.0;
            daily_rate * days * complexity_multiplier * risk_multiplier
        });

        PricingResult {
            input,
            hourly_rate,
            daily_rate,
            weekly_rate,
            monthly_rate,
            project_rate,
        }
    }
}
