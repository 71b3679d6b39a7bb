//! Slider identity and the change notification it posts.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SLIDER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a slider, carried by every notification it posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SliderId(u64);

impl SliderId {
    pub(crate) fn next() -> Self {
        Self(NEXT_SLIDER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slider#{}", self.0)
    }
}

/// Posted whenever a slider accepts a value.
///
/// Hosts filter on `slider` to tell several sliders apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderChanged {
    /// The slider that changed.
    pub slider: SliderId,
    /// Its new value.
    pub value: i64,
}
