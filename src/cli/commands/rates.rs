use ratecard_domain::CurrencyCode;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::format_amount;

const NO_RATES: &str =
    "No exchange rates available; conversions treat every rate as 1. Check `config show`.";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "rates",
            "Show USD exchange rates",
            "rates [code...]",
            cmd_rates,
        ),
        CommandEntry::new(
            "convert",
            "Convert an amount between currencies",
            "convert <amount> <from> <to>",
            cmd_convert,
        ),
    ]
}

fn cmd_rates(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let wanted: Vec<CurrencyCode> = args.iter().map(|code| CurrencyCode::new(*code)).collect();
    let table = context.rates();
    if table.is_empty() {
        io::print_warning(NO_RATES);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = table
        .iter()
        .filter(|(code, _)| wanted.is_empty() || wanted.contains(code))
        .map(|(code, rate)| vec![code.to_string(), format!("{rate:.4}")])
        .collect();
    for code in wanted.iter().filter(|code| table.rate(code).is_none()) {
        io::print_warning(format!("No rate for {code}"));
    }
    if rows.is_empty() {
        return Ok(());
    }
    output::section(format!("Rates per 1 USD ({} currencies)", rows.len()));
    output::table(&["Code", "Rate"], &rows);
    Ok(())
}

fn cmd_convert(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [amount, from, to] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: convert <amount> <from> <to>".into(),
        ));
    };
    let amount: f64 = amount
        .parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
        .ok_or_else(|| CommandError::InvalidArguments(format!("`{amount}` is not a number")))?;
    let from = currency_arg(from)?;
    let to = currency_arg(to)?;

    let style = context.number_style();
    let converted = if from == to {
        amount
    } else {
        let table = context.rates();
        for code in [&from, &to] {
            if !code.is_base() && table.rate(code).is_none() {
                io::print_warning(format!("No rate for {code}; treating it as 1."));
            }
        }
        table.convert(amount, &from, &to)
    };

    io::print_info(format!(
        "{} = {}",
        format_amount(amount, &from, style),
        format_amount(converted, &to, style)
    ));
    Ok(())
}

fn currency_arg(value: &str) -> Result<CurrencyCode, CommandError> {
    let code = CurrencyCode::new(value);
    if code.is_well_formed() {
        Ok(code)
    } else {
        Err(CommandError::InvalidArguments(format!(
            "`{value}` is not a three-letter currency code"
        )))
    }
}
