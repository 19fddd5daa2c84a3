//! Input data model: trigger primitives grouped into candidate activities.
//!
//! Reading and decoding fragment files is the job of an external tool; this
//! crate only consumes its output, an ordered sequence of point-like records
//! per candidate activity. A record needs exactly two fields here: a start
//! time in detector ticks and a channel index.

/// One trigger primitive (TP) hit.
///
/// Identity is positional: two primitives with identical fields are still
/// distinct points of their activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerPrimitive {
    /// Start time in detector ticks.
    pub time_start: u64,
    /// Readout channel index.
    pub channel: u32,
}

impl TriggerPrimitive {
    /// Creates a new trigger primitive.
    #[inline]
    pub fn new(time_start: u64, channel: u32) -> Self {
        Self {
            time_start,
            channel,
        }
    }
}

/// One candidate trigger activity (TA): an ordered collection of primitives
/// purported to form a single density-based cluster.
///
/// Immutable once constructed; the validator never reorders or clones the
/// underlying records.
#[derive(Debug, Clone, Default)]
pub struct Activity {
    primitives: Vec<TriggerPrimitive>,
}

impl Activity {
    /// Creates an activity from its primitives, preserving order.
    pub fn new(primitives: Vec<TriggerPrimitive>) -> Self {
        Self { primitives }
    }

    /// Creates an activity with no primitives.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of primitives in this activity.
    #[inline]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Returns true if the activity holds no primitives.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// The primitives in their original order.
    #[inline]
    pub fn primitives(&self) -> &[TriggerPrimitive] {
        &self.primitives
    }
}

impl FromIterator<TriggerPrimitive> for Activity {
    fn from_iter<I: IntoIterator<Item = TriggerPrimitive>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<(u64, u32)>> for Activity {
    fn from(pairs: Vec<(u64, u32)>) -> Self {
        pairs
            .into_iter()
            .map(|(time_start, channel)| TriggerPrimitive::new(time_start, channel))
            .collect()
    }
}
