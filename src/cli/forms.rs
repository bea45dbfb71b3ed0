//! Guided prompts for `calc` in interactive mode.

use dialoguer::theme::ColorfulTheme;
use ratecard_core::validation::{MAX_VACATION_WEEKS, MAX_WEEKLY_HOURS};
use ratecard_domain::{CurrencyCode, ExperienceLevel, PricingInput, ProjectComplexity};

use crate::cli::commands::calc::{
    DEFAULT_PROJECT_COMPLEXITY, DEFAULT_PROJECT_DAYS, DEFAULT_RISK_FACTOR,
};
use crate::cli::core::CommandError;
use crate::cli::io;

/// Tax must stay below 100%.
const MAX_TAX_RATE: f64 = 99.99;
const MAX_PROJECT_DAYS: f64 = 3650.0;

pub struct CalculationForm<'a> {
    theme: &'a ColorfulTheme,
    defaults: PricingInput,
}

impl<'a> CalculationForm<'a> {
    pub fn new(theme: &'a ColorfulTheme, defaults: PricingInput) -> Self {
        Self { theme, defaults }
    }

    /// Walks through every field, pre-filled with the defaults.
    pub fn run(self) -> Result<PricingInput, CommandError> {
        let theme = self.theme;
        let defaults = self.defaults;

        let name = loop {
            let name = io::prompt_text(theme, "Project name", &defaults.name)?;
            if !name.trim().is_empty() {
                break name.trim().to_string();
            }
            io::print_warning("A name is required.");
        };

        let level_index = ExperienceLevel::ALL
            .iter()
            .position(|level| *level == defaults.experience_level)
            .unwrap_or(1);
        let experience_level =
            ExperienceLevel::ALL[io::select_index(theme, "Experience", &ExperienceLevel::ALL, level_index)?];

        let fixed_costs = io::prompt_number(
            theme,
            "Monthly fixed costs",
            defaults.fixed_costs,
            0.0,
            f64::MAX,
        )?;
        let weekly_hours = io::prompt_number(
            theme,
            "Billable hours per week",
            defaults.weekly_hours,
            1.0,
            MAX_WEEKLY_HOURS,
        )?;
        let profit_margin =
            io::prompt_number(theme, "Profit margin %", defaults.profit_margin, 0.0, 100.0)?;
        let vacation_weeks = io::prompt_number(
            theme,
            "Vacation weeks per year",
            defaults.vacation_weeks,
            0.0,
            MAX_VACATION_WEEKS,
        )?;
        let tax_rate = io::prompt_number(theme, "Tax rate %", defaults.tax_rate, 0.0, MAX_TAX_RATE)?;

        let currency = loop {
            let code = CurrencyCode::new(io::prompt_text(
                theme,
                "Currency",
                defaults.currency.as_str(),
            )?);
            if code.is_well_formed() {
                break code;
            }
            io::print_warning("Use a three-letter code such as USD or EUR.");
        };

        let mut input = PricingInput {
            name,
            experience_level,
            fixed_costs,
            weekly_hours,
            profit_margin,
            vacation_weeks,
            tax_rate,
            currency,
            ..PricingInput::default()
        };

        if io::confirm_action(theme, "Quote a fixed-length project too?", false)? {
            let days = io::prompt_number(
                theme,
                "Project duration (days)",
                f64::from(DEFAULT_PROJECT_DAYS),
                1.0,
                MAX_PROJECT_DAYS,
            )?;
            let complexity_index = ProjectComplexity::ALL
                .iter()
                .position(|complexity| *complexity == DEFAULT_PROJECT_COMPLEXITY)
                .unwrap_or(1);
            let complexity = ProjectComplexity::ALL[io::select_index(
                theme,
                "Complexity",
                &ProjectComplexity::ALL,
                complexity_index,
            )?];
            let risk = io::prompt_number(theme, "Risk buffer %", DEFAULT_RISK_FACTOR, 0.0, 100.0)?;
            input = input.with_project(days, complexity, risk);
        }

        Ok(input)
    }
}
