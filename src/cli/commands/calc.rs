use ratecard_core::PricingService;
use ratecard_domain::{
    CurrencyCode, ExperienceLevel, Identifiable, PricingInput, ProjectComplexity,
};

use crate::cli::commands::history::print_calculation;
use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::forms::CalculationForm;
use crate::cli::io;
use crate::cli::registry::CommandEntry;

pub(crate) const DEFAULT_PROJECT_DAYS: u32 = 10;
pub(crate) const DEFAULT_PROJECT_COMPLEXITY: ProjectComplexity = ProjectComplexity::Medium;
pub(crate) const DEFAULT_RISK_FACTOR: f64 = 15.0;

const USAGE: &str = "calc [--name N] [--costs X] [--hours H] [--level junior|mid|senior] \
[--margin M] [--vacation V] [--tax T] [--currency C] [--days D] [--complexity low|medium|high] [--risk R]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "calc",
        "Price a job and add it to the history",
        USAGE,
        cmd_calc,
    )]
}

fn cmd_calc(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let defaults = PricingInput::new("", CurrencyCode::new(context.config.currency.as_str()));
    let input = if context.mode() == CliMode::Interactive && args.is_empty() {
        CalculationForm::new(&context.theme, defaults).run()?
    } else {
        input_from_flags(defaults, args)?
    };

    let result = PricingService::price(input)?;
    let calculation = context.history.add(result);
    tracing::info!(id = calculation.id(), "calculation saved");

    print_calculation(context, &calculation);
    io::print_success(format!("Saved as {}", calculation.id()));
    Ok(())
}

/// Applies `--flag value` (or `--flag=value`) pairs on top of `input`.
pub(crate) fn input_from_flags(
    mut input: PricingInput,
    args: &[&str],
) -> Result<PricingInput, CommandError> {
    let mut days = None;
    let mut complexity = None;
    let mut risk = None;

    for (flag, value) in parse_flags(args)? {
        match flag {
            "name" => input.name = value.to_string(),
            "costs" => input.fixed_costs = parse_number(flag, value)?,
            "hours" => input.weekly_hours = parse_number(flag, value)?,
            "level" => {
                input.experience_level = value
                    .parse::<ExperienceLevel>()
                    .map_err(CommandError::InvalidArguments)?
            }
            "margin" => input.profit_margin = parse_number(flag, value)?,
            "vacation" => input.vacation_weeks = parse_number(flag, value)?,
            "tax" => input.tax_rate = parse_number(flag, value)?,
            "currency" => input.currency = CurrencyCode::new(value),
            "days" => days = Some(parse_number(flag, value)?),
            "complexity" => {
                complexity = Some(
                    value
                        .parse::<ProjectComplexity>()
                        .map_err(CommandError::InvalidArguments)?,
                )
            }
            "risk" => risk = Some(parse_number(flag, value)?),
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown flag `--{other}`"
                )))
            }
        }
    }

    match days {
        Some(days) => Ok(input.with_project(
            days,
            complexity.unwrap_or(DEFAULT_PROJECT_COMPLEXITY),
            risk.unwrap_or(DEFAULT_RISK_FACTOR),
        )),
        None if complexity.is_some() || risk.is_some() => Err(CommandError::InvalidArguments(
            "--complexity and --risk only apply together with --days".into(),
        )),
        None => Ok(input),
    }
}

fn parse_flags<'a>(args: &[&'a str]) -> Result<Vec<(&'a str, &'a str)>, CommandError> {
    let mut pairs = Vec::new();
    let mut iter = args.iter();
    while let Some(&arg) = iter.next() {
        let Some(flag) = arg.strip_prefix("--") else {
            return Err(CommandError::InvalidArguments(format!(
                "unexpected argument `{arg}`; flags look like --name value"
            )));
        };
        match flag.split_once('=') {
            Some((name, value)) => pairs.push((name, value)),
            None => {
                let value = iter.next().copied().ok_or_else(|| {
                    CommandError::InvalidArguments(format!("--{flag} needs a value"))
                })?;
                pairs.push((flag, value));
            }
        }
    }
    Ok(pairs)
}

fn parse_number(flag: &str, value: &str) -> Result<f64, CommandError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| {
            CommandError::InvalidArguments(format!("--{flag} expects a number, got `{value}`"))
        })
}
