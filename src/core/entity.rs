//! Card identity.
//!
//! Every card dealt into a deck gets a `CardUid`. Two cards sharing the same
//! face name are told apart by their uid.
//!
//! ## Allocation
//!
//! Uids come from a `UidAllocator` owned by the engine. The allocator is never
//! reset between sessions, so a uid from an earlier deck never aliases a card
//! in the current one.
//!
//! ```
//! use memory_match::core::{CardUid, UidAllocator};
//!
//! let mut uids = UidAllocator::new();
//! let a = uids.alloc();
//! let b = uids.alloc();
//!
//! assert_ne!(a, b);
//! assert_eq!(b, CardUid(1));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a dealt card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardUid(pub u32);

impl CardUid {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardUid {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// Monotonic source of fresh `CardUid`s.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UidAllocator {
    next: u32,
}

impl UidAllocator {
    /// Create an allocator starting at uid 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next uid.
    pub fn alloc(&mut self) -> CardUid {
        let id = CardUid(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }

    /// Number of uids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_is_sequential() {
        let mut uids = UidAllocator::new();

        assert_eq!(uids.alloc(), CardUid(0));
        assert_eq!(uids.alloc(), CardUid(1));
        assert_eq!(uids.alloc(), CardUid(2));
        assert_eq!(uids.allocated(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardUid(42)), "Card#42");
    }

    #[test]
    fn test_from_u32() {
        let uid: CardUid = 7.into();
        assert_eq!(uid.raw(), 7);
    }

    #[test]
    fn test_serialization() {
        let id = CardUid(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardUid = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
