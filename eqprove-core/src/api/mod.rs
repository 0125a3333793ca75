/*!

The public API of the library: the surface a CNF converter or CLI driver (both out of scope for this
crate) builds on. [`builder::ClauseSetBuilder`] accepts already-parsed sorts, symbols, terms, and
clauses; [`derivation::Derivation`] reconstructs the proof DAG behind an empty clause a saturation run
derived.

*/

pub mod builder;
pub mod derivation;

pub use builder::{ClauseSet, ClauseSetBuilder, NamedClause};
pub use derivation::{Derivation, DerivationStep};
