//! A stored, immutable pricing computation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{common::*, pricing::*};

/// One history entry: a pricing result stamped with an id and creation time.
///
/// Fields are private so an entry cannot be edited once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Calculation {
    id: String,
    #[serde(flatten)]
    result: PricingResult,
    #[serde(rename = "date")]
    created_at: DateTime<Utc>,
}

impl Calculation {
    pub fn new(id: impl Into<String>, result: PricingResult, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            result,
            created_at,
        }
    }

    pub fn result(&self) -> &PricingResult {
        &self.result
    }

    pub fn input(&self) -> &PricingInput {
        &self.result.input
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.result.input.currency
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Drops a project rate that has no project duration behind it.
    ///
    /// Older snapshots stored `projectRate: 0` for every entry.
    pub fn normalized(mut self) -> Self {
        if self.result.input.project_duration.is_none() {
            self.result.project_rate = None;
        }
        self
    }
}

impl Identifiable for Calculation {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Calculation {
    fn name(&self) -> &str {
        &self.result.input.name
    }
}

impl Displayable for Calculation {
    fn display_label(&self) -> String {
        let name = if self.name().trim().is_empty() {
            "(unnamed)"
        } else {
            self.name()
        };
        format!(
            "{} [{}] {}",
            name,
            self.result.input.experience_level,
            self.created_at.format("%Y-%m-%d %H:%M")
        )
    }
}
