use indexmap::IndexSet;
use serde::Serialize;

use crate::common::{is_burn_address, is_contract_address, is_valid_stacks_address};
use crate::records::RawRecord;

/// Deduplicated addresses in first-occurrence order.
pub type CleanAddressSet = IndexSet<String>;

const PREVIEW_LEN: usize = 10;
const CONTRACT_EXAMPLES: usize = 5;

/// Record counts after each filter stage, in pipeline order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    pub initial: usize,
    pub preview: Vec<RawRecord>,
    pub after_absent: usize,
    pub duplicates_removed: usize,
    pub unique: usize,
    pub contracts_found: usize,
    pub contract_examples: Vec<String>,
    pub after_contracts: usize,
    pub burn_found: usize,
    pub after_burn: usize,
}

#[derive(Debug, Clone)]
pub struct Filtered {
    pub addresses: CleanAddressSet,
    pub report: FilterReport,
}

/// Runs the cleaning pipeline and returns only the surviving addresses.
pub fn filter(records: Vec<RawRecord>) -> CleanAddressSet {
    filter_with_report(records).addresses
}

/// Runs the cleaning pipeline, recording how many records each stage removed.
///
/// Stages, in order:
/// 1. drop absent records and records that are blank once trimmed
/// 2. trim surrounding whitespace
/// 3. drop exact duplicates, keeping the first occurrence
/// 4. drop contract principals (anything containing `.`)
/// 5. drop the burn address
///
/// Address shape is deliberately not checked here, see [`check_format`].
pub fn filter_with_report(records: Vec<RawRecord>) -> Filtered {
    let mut report = FilterReport {
        initial: records.len(),
        preview: records.iter().take(PREVIEW_LEN).cloned().collect(),
        ..Default::default()
    };

    let present: Vec<String> = records
        .into_iter()
        .flatten()
        .map(|record| record.trim().to_string())
        .filter(|address| !address.is_empty())
        .collect();
    report.after_absent = present.len();

    let mut addresses: CleanAddressSet = present.into_iter().collect();
    report.unique = addresses.len();
    report.duplicates_removed = report.after_absent - report.unique;
    tracing::debug!(
        unique = report.unique,
        duplicates = report.duplicates_removed,
        "deduplicated addresses"
    );

    report.contract_examples = addresses
        .iter()
        .filter(|a| is_contract_address(a))
        .take(CONTRACT_EXAMPLES)
        .cloned()
        .collect();
    addresses.retain(|a| !is_contract_address(a));
    report.after_contracts = addresses.len();
    report.contracts_found = report.unique - report.after_contracts;

    addresses.retain(|a| !is_burn_address(a));
    report.after_burn = addresses.len();
    report.burn_found = report.after_contracts - report.after_burn;
    tracing::debug!(
        contracts = report.contracts_found,
        burn = report.burn_found,
        remaining = report.after_burn,
        "removed contract and burn addresses"
    );

    Filtered { addresses, report }
}

/// Split of a clean set by address shape. Both halves keep input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormatReport {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

impl FormatReport {
    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }
}

/// Partitions addresses into standard-shaped and malformed ones. Reporting
/// only: callers still render every address.
pub fn check_format(addresses: &CleanAddressSet) -> FormatReport {
    let (valid, invalid): (Vec<String>, Vec<String>) = addresses
        .iter()
        .cloned()
        .partition(|a| is_valid_stacks_address(a));
    for address in &invalid {
        tracing::warn!(%address, len = address.chars().count(), "malformed address");
    }
    FormatReport { valid, invalid }
}
