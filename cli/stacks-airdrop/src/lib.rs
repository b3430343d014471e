pub mod common;
pub mod contract;
pub mod error;
pub mod filter;
pub mod logging;
pub mod pipeline;
pub mod records;

pub use common::{
    is_burn_address, is_contract_address, is_valid_stacks_address, write_file_atomic,
    BURN_ADDRESS,
};
pub use contract::{render, RenderMode, TransferCall, DEFAULT_OUTPUT_PATH};
pub use error::PipelineError;
pub use filter::{
    check_format, filter, filter_with_report, CleanAddressSet, FilterReport, FormatReport,
};
pub use pipeline::{generate, inspect, Generated, Inspection};
pub use records::{read_records, RawRecord};
