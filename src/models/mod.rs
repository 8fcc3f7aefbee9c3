//! Typed records for HIBP responses.
//!
//! Models are built with `serde`. Each field accepts the service's PascalCase
//! key as an alias for its snake_case name, missing required fields and type
//! mismatches are hard errors, and unknown keys are ignored.

mod breach;
mod data_class;
mod password;
mod paste;
mod subscription;
pub mod timestamp;

use std::collections::BTreeMap;

pub use breach::{Breach, BreachName};
pub use data_class::DataClass;
pub use password::{
    HASH_PREFIX_LEN, PasswordRangeEntry, RangeLineError, find_suffix_count, is_valid_hash_prefix,
    parse_range_lines,
};
pub use paste::Paste;
pub use subscription::{SubscribedDomain, SubscriptionStatus};

/// Alias → names mapping used by `/breacheddomain` (breach names) and
/// `/stealerlogsbyemaildomain` (website domains).
pub type AliasMap = BTreeMap<String, Vec<String>>;
