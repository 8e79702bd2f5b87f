//! Agent sessions
//!
//! Naming of runnable session handles and the rig short-prefix registry they
//! depend on.

pub mod candidates;
pub mod names;
pub mod prefix;

pub use candidates::candidates_for;
pub use prefix::{PrefixRegistry, DEFAULT_PREFIX};
