//! Identifier predicates

use uuid::Uuid;

use super::Predicate;

/// Holds for the nil UUID (all zero bits).
#[derive(Clone, Copy, Default, Debug)]
pub struct NilId;

impl Predicate<Uuid> for NilId {
    #[inline]
    fn check(&self, value: &Uuid) -> bool {
        value.is_nil()
    }
}

/// Create a predicate that holds for `Uuid::nil()`.
///
/// # Example
///
/// ```rust
/// use uuid::Uuid;
/// use wrapture::predicate::*;
///
/// assert!(nil_id().check(&Uuid::nil()));
/// assert!(!nil_id().check(&Uuid::from_u128(7)));
/// ```
pub fn nil_id() -> NilId {
    NilId
}
