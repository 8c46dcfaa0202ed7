use uuid::Uuid;

use super::Guard;
use crate::predicate::{nil_id, Predicate};

impl Guard {
    /// Record `message` when `id` is the nil UUID.
    ///
    /// # Example
    ///
    /// ```rust
    /// use uuid::Uuid;
    /// use wrapture::Guard;
    ///
    /// let outcome = Guard::against()
    ///     .empty_id(Uuid::nil(), "Order id is required.")
    ///     .to_outcome();
    /// assert_eq!(outcome.error(), Some("Order id is required."));
    /// ```
    pub fn empty_id(self, id: Uuid, message: impl Into<String>) -> Self {
        self.check(|| nil_id().check(&id), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_nil_id_passes() {
        assert!(Guard::against()
            .empty_id(Uuid::from_u128(0x1234), "x")
            .to_outcome()
            .is_success());
    }
}
