use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::common::write_file_atomic;
use crate::contract::{render, RenderMode, TransferCall};
use crate::error::Result;
use crate::filter::{check_format, filter_with_report, CleanAddressSet, FilterReport, FormatReport};
use crate::records::read_records;

/// Everything learned about an input file without writing anything.
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    #[serde(skip)]
    pub addresses: CleanAddressSet,
    pub filter: FilterReport,
    pub format: FormatReport,
}

/// Result of a run that wrote a contract.
#[derive(Debug, Clone)]
pub struct Generated {
    pub inspection: Inspection,
    pub output: PathBuf,
}

impl Generated {
    /// Number of addresses rendered into the contract.
    pub fn rendered(&self) -> usize {
        self.inspection.addresses.len()
    }
}

/// Reads `input` and runs the filter and the format check.
///
/// # Errors
/// Same as [`generate`], minus the write failures
pub fn inspect(input: &Path) -> Result<Inspection> {
    let records = read_records(input)?;
    let filtered = filter_with_report(records);
    let format = check_format(&filtered.addresses);
    Ok(Inspection {
        addresses: filtered.addresses,
        filter: filtered.report,
        format,
    })
}

/// Reads `input`, cleans it and writes the contract for `mode` to `output`.
///
/// Malformed addresses are rendered in both modes; the format check only feeds
/// the report. Nothing is written if reading fails.
///
/// # Arguments
/// * `input` - Headerless single-column CSV of addresses
/// * `mode` - Which contract template to render
/// * `call` - Token contract and amount used in every transfer line
/// * `output` - Contract path, overwritten if it exists
///
/// # Returns
/// The clean addresses with their stage and format reports
///
/// # Errors
/// Returns [`PipelineError::InputNotFound`](crate::error::PipelineError::InputNotFound)
/// if `input` does not exist, `MalformedInput` if it is not a single-column
/// list, and `Internal` for read or write failures
pub fn generate(
    input: &Path,
    mode: RenderMode,
    call: &TransferCall,
    output: &Path,
) -> Result<Generated> {
    let inspection = inspect(input)?;
    let contract = render(&inspection.addresses, mode, call);
    write_file_atomic(output, &contract)?;
    tracing::info!(
        output = %output.display(),
        addresses = inspection.addresses.len(),
        ?mode,
        "contract written"
    );
    Ok(Generated {
        inspection,
        output: output.to_path_buf(),
    })
}
