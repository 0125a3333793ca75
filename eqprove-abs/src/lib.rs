/*!

Types/type aliases that abstract over the implementing backing type.

# Background and Motivation

A motivating example is the `IString` type, an interned string type. A number of external crates could provide this
functionality. This module redirects to whatever chosen implementation we want. To use the
[`string_cache` crate](https://crates.io/crates/string_cache), we just define `IString` as an alias for
`string_cache::DefaultAtom`:

```ignore
pub use string_cache::DefaultAtom as IString;
```

For types or infrastructure with very different backing implementations, we define an abstraction layer over the
implementation. The `log` module is the main example: its (crate) public interface consists only of the macros
`critical!`, `error!`, `warn!`, `info!`, `debug!`, and `trace!`. The backing implementation (currently `tracing`) is
encapsulated there.

*/

mod nat_set;
mod partial_ordering;
mod string_util;
pub mod log;
pub mod special_index;

// Aliases and utility
pub use partial_ordering::*;

// region Hashing data structures
pub use std::collections::{HashMap, HashSet};

// For vectors that are expected to have few or zero elements.
pub use smallvec::{smallvec, SmallVec};
// endregion

// Logging
pub use tracing;

// Interned string. `DefaultAtom` caches globally and is usable across threads.
pub use string_cache::DefaultAtom as IString;

// A set of (small) natural numbers, used for variable-occurrence sets and sort bitsets.
pub use nat_set::NatSet;

// Join sequences with a separator.
pub use string_util::{int_to_subscript, join_iter, join_string};
