/*!

Structured errors returned to a top-level driver (out of scope for this crate). Where the original
prover prints a diagnostic and exits the process, this core returns one of these variants instead and
lets the caller decide whether to print and exit.

*/

use thiserror::Error;

use crate::core::config::ResourceLimit;

#[derive(Debug, Error)]
pub enum ProverError {
  /// The term bank or clause arena could not grow to satisfy an allocation.
  #[error("out of memory")]
  OutOfMemory,

  /// A clause, term, or symbol declaration is ill-formed: unknown sort, arity mismatch, etc.
  #[error("input semantic error: {detail}")]
  InputSemantic { detail: String },

  /// A configured resource limit was exceeded during saturation.
  #[error("resource limit exceeded: {0:?}")]
  ResourceLimitExceeded(ResourceLimit),

  /// An internal invariant was violated (index corruption, property mismatch). Indicates a bug.
  #[error("assertion failed: {detail}")]
  Assertion { detail: String },
}

pub type ProverResult<T> = Result<T, ProverError>;
