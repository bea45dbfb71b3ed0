use ratecard_domain::{Calculation, Identifiable, NamedEntity};

/// Used in place of a blank calculation name.
pub const FALLBACK_EXPORT_NAME: &str = "budget";

/// File stem for exported artifacts: `"{name or 'budget'}-{id}"`.
pub fn export_file_stem(calculation: &Calculation) -> String {
    let name = calculation.name().trim();
    let name = if name.is_empty() {
        FALLBACK_EXPORT_NAME
    } else {
        name
    };
    format!("{}-{}", name, calculation.id())
}
