//! Contains the definition of [`SharedStr`].

use std::{borrow::Borrow, sync::Arc};

use serde::{Deserialize, Serialize};

/// An immutable, reference-counted string used as the identity token of
/// symbols and variables in the [`crate::Default`] model.
///
/// Cloning is cheap; comparison and hashing are by string content.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct SharedStr(Arc<str>);

impl SharedStr {
    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for SharedStr {
    fn from(value: &str) -> Self { Self(Arc::from(value)) }
}

impl From<String> for SharedStr {
    fn from(value: String) -> Self { Self(Arc::from(value)) }
}

impl Borrow<str> for SharedStr {
    fn borrow(&self) -> &str { &self.0 }
}

impl AsRef<str> for SharedStr {
    fn as_ref(&self) -> &str { &self.0 }
}
