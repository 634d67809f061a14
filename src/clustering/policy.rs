//! Cluster sizing policies.

use serde::{Deserialize, Serialize};

/// Default minimum cluster size when no sizing parameter is supplied.
pub const DEFAULT_MIN_SIZE: usize = 2;

/// Default maximum cluster size when no sizing parameter is supplied.
pub const DEFAULT_MAX_SIZE: usize = 5;

/// How many tickets a seed must gather, and how many it may take.
///
/// # Examples
///
/// ```
/// use u_geocluster::clustering::SizePolicy;
///
/// let precise = SizePolicy::Precise(3);
/// assert_eq!(precise.take(2), None);
/// assert_eq!(precise.take(7), Some(3));
///
/// let range = SizePolicy::Range { min: 2, max: 4 };
/// assert_eq!(range.take(1), None);
/// assert_eq!(range.take(3), Some(3));
/// assert_eq!(range.take(9), Some(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizePolicy {
    /// Commit only clusters of exactly this many tickets.
    Precise(usize),
    /// Commit clusters of at least `min` tickets, taking at most `max`.
    Range { min: usize, max: usize },
}

impl SizePolicy {
    /// Resolves the optional sizing parameters of a request into one policy.
    ///
    /// Precedence: `precise`, then `min`/`max`, then the legacy single
    /// `cluster_size` (same behaviour as precise), then the default range
    /// 2..=5. When only one of `min`/`max` is given the other takes its
    /// default, widened so the range never inverts.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_geocluster::clustering::SizePolicy;
    ///
    /// assert_eq!(SizePolicy::resolve(Some(3), Some(2), Some(4), Some(6)), SizePolicy::Precise(3));
    /// assert_eq!(SizePolicy::resolve(None, Some(2), Some(4), Some(6)), SizePolicy::Range { min: 2, max: 4 });
    /// assert_eq!(SizePolicy::resolve(None, None, None, Some(6)), SizePolicy::Precise(6));
    /// assert_eq!(SizePolicy::resolve(None, None, None, None), SizePolicy::default());
    /// ```
    pub fn resolve(
        precise: Option<usize>,
        min: Option<usize>,
        max: Option<usize>,
        legacy: Option<usize>,
    ) -> Self {
        if let Some(n) = precise {
            return SizePolicy::Precise(n);
        }
        match (min, max, legacy) {
            (Some(min), Some(max), _) => SizePolicy::Range { min, max },
            (Some(min), None, _) => SizePolicy::Range {
                min,
                max: DEFAULT_MAX_SIZE.max(min),
            },
            (None, Some(max), _) => SizePolicy::Range {
                min: DEFAULT_MIN_SIZE.min(max),
                max,
            },
            (None, None, Some(n)) => SizePolicy::Precise(n),
            (None, None, None) => SizePolicy::default(),
        }
    }

    /// Fewest candidates (seed included) a seed needs to commit a cluster.
    pub fn min_required(&self) -> usize {
        match *self {
            SizePolicy::Precise(n) => n,
            SizePolicy::Range { min, .. } => min,
        }
    }

    /// Most tickets a single cluster may take.
    pub fn max_allowed(&self) -> usize {
        match *self {
            SizePolicy::Precise(n) => n,
            SizePolicy::Range { max, .. } => max,
        }
    }

    /// Number of closest candidates to take when `available` qualify.
    ///
    /// Returns `None` when the seed cannot commit a cluster, including the
    /// degenerate case where the policy would select nothing.
    pub fn take(&self, available: usize) -> Option<usize> {
        if available < self.min_required() {
            return None;
        }
        let k = available.min(self.max_allowed());
        (k > 0).then_some(k)
    }
}

impl Default for SizePolicy {
    fn default() -> Self {
        SizePolicy::Range {
            min: DEFAULT_MIN_SIZE,
            max: DEFAULT_MAX_SIZE,
        }
    }
}
