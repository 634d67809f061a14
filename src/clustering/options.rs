//! Parameters of a clustering pass.

use serde::{Deserialize, Serialize};

use super::SizePolicy;
use crate::error::{ClusterError, Result};

/// Radius, sizing policy, and seeding order for one pass.
///
/// Defaults: range policy 2..=5, priority ranking enabled.
///
/// # Examples
///
/// ```
/// use u_geocluster::clustering::{ClusteringOptions, SizePolicy};
///
/// let opts = ClusteringOptions::new(5.0)
///     .with_size_range(2, 4)
///     .with_priority_ranking(false);
/// assert_eq!(opts.policy, SizePolicy::Range { min: 2, max: 4 });
/// assert!(!opts.prioritize_high_priority);
/// assert!(opts.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusteringOptions {
    /// Maximum seed-to-member distance in kilometres.
    pub radius_km: f64,
    pub policy: SizePolicy,
    /// Seed in descending priority order instead of input order.
    pub prioritize_high_priority: bool,
}

impl ClusteringOptions {
    /// Options with the given radius and default sizing.
    pub fn new(radius_km: f64) -> Self {
        Self {
            radius_km,
            policy: SizePolicy::default(),
            prioritize_high_priority: true,
        }
    }

    /// Sets the sizing policy.
    pub fn with_policy(mut self, policy: SizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Requires clusters of exactly `n` tickets.
    pub fn with_precise_size(self, n: usize) -> Self {
        self.with_policy(SizePolicy::Precise(n))
    }

    /// Allows clusters of `min..=max` tickets.
    pub fn with_size_range(self, min: usize, max: usize) -> Self {
        self.with_policy(SizePolicy::Range { min, max })
    }

    /// Legacy single size: behaves exactly like [`Self::with_precise_size`].
    pub fn with_cluster_size(self, n: usize) -> Self {
        self.with_precise_size(n)
    }

    /// Enables or disables priority-ranked seeding.
    pub fn with_priority_ranking(mut self, enabled: bool) -> Self {
        self.prioritize_high_priority = enabled;
        self
    }

    /// Checks the parameters for values that make a pass meaningless.
    ///
    /// The pass itself accepts anything; this is the optional hardening
    /// step callers run first.
    pub fn validate(&self) -> Result<()> {
        if !self.radius_km.is_finite() || self.radius_km <= 0.0 {
            return Err(ClusterError::InvalidRadius(self.radius_km));
        }
        match self.policy {
            SizePolicy::Precise(0) => Err(ClusterError::InvalidSize {
                field: "precise_cluster_size",
                value: 0,
            }),
            SizePolicy::Range { min: 0, .. } => Err(ClusterError::InvalidSize {
                field: "min_cluster_size",
                value: 0,
            }),
            SizePolicy::Range { min, max } if min > max => {
                Err(ClusterError::ContradictorySizes { min, max })
            }
            _ => Ok(()),
        }
    }
}
