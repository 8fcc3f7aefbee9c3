use std::fmt;

use serde::{Deserialize, Serialize};

/// A category label for exposed data, e.g. "Email addresses".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataClass(String);

impl DataClass {
    /// Creates a data class label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DataClass {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DataClass {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for DataClass {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl PartialEq<str> for DataClass {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DataClass {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
