//! Serialised asset type identifier.

use core::fmt;

use serde::Serialize;

use crate::traits::Asset;

/// The serialised type identifier of an [`Asset`].
///
/// Ordering compares the identifier bytes lexicographically; when one
/// identifier is a prefix of the other the shorter sorts first.  This is
/// the natural order of `[u8]`, so it is total and has no ties between
/// distinct identifiers.
///
/// # Examples
///
/// ```
/// use pairswap::domain::AssetId;
///
/// let sui = AssetId::new("0x2::sui::SUI");
/// let usdc = AssetId::new("0x2::usdc::USDC");
/// assert!(sui < usdc);
/// assert!(AssetId::new("0x2::a") < AssetId::new("0x2::ab"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AssetId(&'static str);

impl AssetId {
    /// Wraps a static type identifier.
    #[must_use]
    pub const fn new(type_name: &'static str) -> Self {
        Self(type_name)
    }

    /// Identifier of the asset type `T`.
    #[must_use]
    pub const fn of<T: Asset>() -> Self {
        Self(T::TYPE_NAME)
    }

    /// Serialised form.
    #[must_use]
    pub const fn as_bytes(&self) -> &'static [u8] {
        self.0.as_bytes()
    }

    /// Identifier as text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl PartialOrd for AssetId {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AssetId {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
