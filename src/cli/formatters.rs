use ratecard_domain::{Calculation, Displayable, Identifiable};

use crate::currency::{format_amount, NumberStyle};

pub const HISTORY_HEADERS: [&str; 6] = ["ID", "Name", "Level", "Hourly", "Project", "Created"];
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Renders calculations for the terminal using one locale's separators.
#[derive(Debug, Clone, Copy)]
pub struct CliFormatters {
    style: NumberStyle,
}

impl CliFormatters {
    pub fn new(style: NumberStyle) -> Self {
        Self { style }
    }

    pub fn money(&self, calculation: &Calculation, amount: f64) -> String {
        format_amount(amount, calculation.currency(), self.style)
    }

    /// Inputs followed by every derived rate.
    pub fn detail_rows(&self, calculation: &Calculation) -> Vec<(&'static str, String)> {
        let input = calculation.input();
        let result = calculation.result();
        let mut rows = vec![
            ("Id", calculation.id().to_string()),
            ("Created", calculation.created_at().format(TIMESTAMP_FORMAT).to_string()),
            ("Currency", input.currency.to_string()),
            ("Experience", input.experience_level.to_string()),
            ("Fixed costs", self.money(calculation, input.fixed_costs)),
            ("Weekly hours", plain(input.weekly_hours)),
            ("Profit margin", format!("{}%", plain(input.profit_margin))),
            ("Vacation weeks", plain(input.vacation_weeks)),
            ("Tax rate", format!("{}%", plain(input.tax_rate))),
        ];
        if let Some(days) = input.project_duration {
            rows.push(("Project days", plain(days)));
            if let Some(complexity) = input.project_complexity {
                rows.push(("Complexity", complexity.to_string()));
            }
            if let Some(risk) = input.risk_factor {
                rows.push(("Risk", format!("{}%", plain(risk))));
            }
        }
        rows.extend([
            ("Hourly rate", self.money(calculation, result.hourly_rate)),
            ("Daily rate", self.money(calculation, result.daily_rate)),
            ("Weekly rate", self.money(calculation, result.weekly_rate)),
            ("Monthly rate", self.money(calculation, result.monthly_rate)),
        ]);
        if let Some(project) = result.project_rate {
            rows.push(("Project rate", self.money(calculation, project)));
        }
        rows
    }

    pub fn history_row(&self, calculation: &Calculation) -> Vec<String> {
        let input = calculation.input();
        let result = calculation.result();
        vec![
            calculation.id().to_string(),
            display_name(calculation),
            input.experience_level.as_str().to_string(),
            self.money(calculation, result.hourly_rate),
            result
                .project_rate
                .map(|rate| self.money(calculation, rate))
                .unwrap_or_else(|| "-".into()),
            calculation.created_at().format(TIMESTAMP_FORMAT).to_string(),
        ]
    }

    pub fn heading(&self, calculation: &Calculation) -> String {
        calculation.display_label()
    }
}

fn display_name(calculation: &Calculation) -> String {
    let name = calculation.input().name.trim();
    if name.is_empty() {
        "(unnamed)".into()
    } else {
        name.to_string()
    }
}

/// Whole numbers without a fraction, everything else as entered.
fn plain(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use ratecard_core::PricingService;
    use ratecard_domain::{CurrencyCode, PricingInput, ProjectComplexity};

    use super::*;

    fn calculation(with_project: bool) -> Calculation {
        let mut input = PricingInput::new("Shop", CurrencyCode::default());
        if with_project {
            input = input.with_project(10.0, ProjectComplexity::Medium, 15.0);
        }
        let result = PricingService::price(input).expect("valid input");
        Calculation::new(
            "c-1",
            result,
            Utc.with_ymd_and_hms(2025, 3, 4, 9, 30, 0).unwrap(),
        )
    }

    #[test]
    fn detail_lists_project_rows_only_for_projects() {
        let formatters = CliFormatters::new(NumberStyle::default());
        let plain_rows = formatters.detail_rows(&calculation(false));
        assert!(plain_rows.iter().all(|(label, _)| *label != "Project rate"));

        let rows = formatters.detail_rows(&calculation(true));
        let value = |wanted: &str| {
            rows.iter()
                .find(|(label, _)| *label == wanted)
                .map(|(_, value)| value.clone())
        };
        assert_eq!(value("Monthly rate").as_deref(), Some("$2,437.50"));
        assert!(value("Project rate").is_some_and(|rate| rate.starts_with("$1,681.8")));
        assert_eq!(value("Tax rate").as_deref(), Some("20%"));
        assert_eq!(value("Complexity").as_deref(), Some("Medium"));
    }

    #[test]
    fn history_row_marks_missing_project_rate() {
        let formatters = CliFormatters::new(NumberStyle::default());
        let row = formatters.history_row(&calculation(false));
        assert_eq!(row[0], "c-1");
        assert_eq!(row[1], "Shop");
        assert_eq!(row[2], "mid");
        assert_eq!(row[4], "-");
        assert_eq!(row[5], "2025-03-04 09:30");
    }
}
