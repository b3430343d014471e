use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;
use tempfile::NamedTempFile;

use crate::error::Result;

/// The well-known Stacks burn address. Never receives an airdrop.
pub const BURN_ADDRESS: &str = "SP000000000000000000002Q6VF78";

/// Base58 alphabet used by Stacks addresses (no `0`, `O`, `I` or `l`).
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Length of a standard (non-contract) principal, prefix included.
pub const STANDARD_ADDRESS_LEN: usize = 40;

static STANDARD_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^S[PT][{BASE58_ALPHABET}]{{{}}}$",
        STANDARD_ADDRESS_LEN - 2
    ))
    .unwrap_or_else(|e| unreachable!("standard address pattern is constant: {e}"))
});

/// Returns true for a contract principal (`<principal>.<contract-name>`).
pub fn is_contract_address(address: &str) -> bool {
    address.contains('.')
}

/// Returns true only for the exact burn address literal.
pub fn is_burn_address(address: &str) -> bool {
    address == BURN_ADDRESS
}

/// Checks the shape of a standard Stacks address.
///
/// A valid address is `SP` or `ST` followed by exactly 38 base58 characters.
/// Surrounding whitespace is ignored. No checksum verification is done.
///
/// # Arguments
/// * `address` - Candidate address, possibly padded with whitespace
///
/// # Returns
/// `true` if the trimmed address has the standard shape
pub fn is_valid_stacks_address(address: &str) -> bool {
    STANDARD_ADDRESS.is_match(address.trim())
}

/// Writes `contents` to `path` atomically.
///
/// The contents go to a uniquely named temp file next to `path`, which is then
/// renamed over it. Missing parent directories are created. If any step fails
/// the temp file is removed and `path` is left untouched.
///
/// # Arguments
/// * `path` - Destination file, overwritten if it exists
/// * `contents` - Full file contents
///
/// # Errors
/// Returns [`PipelineError::Internal`](crate::error::PipelineError::Internal) if
/// the directory, the temp file or the final rename cannot be created
pub fn write_file_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent)?;
            parent
        }
        None => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(contents.as_bytes())?;
    temp.flush()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
