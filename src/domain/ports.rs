use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Seam between a domain record and its flat JSON wire object.
///
/// `to_wire` emits raw stored field values (no title-casing); `from_wire` runs
/// the validating constructor so nothing unvalidated enters the roster.
pub trait Persist: Sized {
    type Wire: Serialize + DeserializeOwned;

    fn to_wire(&self) -> Self::Wire;
    fn from_wire(wire: Self::Wire) -> Result<Self>;
}
