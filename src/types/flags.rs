use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Indicator badges shown on an item, combinable via bitwise OR.
/// Serialized as the raw integer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemIndicatorFlags(pub u32);

impl ItemIndicatorFlags {
    pub const NONE: Self = Self(0);
    pub const HAS_COMMENTS: Self = Self(1);
    pub const HAS_ATTACHMENTS_OR_DOCUMENT_REFS: Self = Self(2);
    pub const HAS_MANUAL_REUSE_OR_OTHER_TRACES: Self = Self(4);
    pub const HAS_LAST_24_HOURS_CHANGES: Self = Self(8);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ItemIndicatorFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ItemIndicatorFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ItemIndicatorFlags {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
