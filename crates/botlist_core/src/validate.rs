//! Schema invariant validation.

use botlist_error::ValidationError;

/// Check a received payload against the cross-field invariants the wire
/// format cannot express.
///
/// Deserialization only guarantees field shapes; invariants that span fields
/// (a shard list summing to the server count, a paged response counting its
/// own results) are not enforced by the platform and must be checked after
/// decode. Implementations report the first violated invariant.
pub trait Validate {
    /// Validate the value, returning the first violated invariant.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the violated invariant.
    fn validate(&self) -> Result<(), ValidationError>;
}
