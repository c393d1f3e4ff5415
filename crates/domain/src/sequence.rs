// crates/domain/src/sequence.rs
//! Contiguous integer sequences.

use robotict_shared_kernel::DomainResult;

use crate::config::NumberRange;

/// Produce `[min, min + 1, ..., max]`.
///
/// The whole sequence is materialised, so callers facing untrusted bounds
/// should check [`NumberRange::len`] first.
///
/// # Errors
///
/// Returns `InvalidRange` when `min > max`; nothing is produced in that case.
pub fn generate(min: i64, max: i64) -> DomainResult<Vec<i64>> {
    Ok(NumberRange::new(min, max)?.iter().collect())
}
