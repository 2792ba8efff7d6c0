//! Module that contains helpers for binning observables

use std::cmp::Ordering;
use std::f64;

/// Enum representing bin limits.
pub enum BinLimits {
    /// Bin limits where each bin has the same size.
    Equal {
        /// Left limit.
        left: f64,
        /// Right limit.
        right: f64,
        /// Number of bins.
        bins: usize,
    },
    /// Bin limits where each bin has an arbitrary size.
    Unequal {
        /// Bin boundaries.
        limits: Vec<f64>,
    },
}

impl BinLimits {
    /// Constructor for BinLimits. This function automatically decides whether the given `limits`
    /// are `Equal` or `Unequal`.
    pub fn new(mut limits: Vec<f64>) -> BinLimits {
        limits.sort_by(|left, right| {
            if left < right {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        });

        if limits
            .iter()
            .zip(limits.iter().skip(1))
            .map(|(current, next)| next - current)
            .collect::<Vec<f64>>()
            .windows(2)
            .all(|val| (val[0] / val[1]).max(val[1] / val[0]) <= 1.0 + 8.0 * f64::EPSILON)
        {
            BinLimits::Equal {
                left: *limits.first().unwrap(),
                right: *limits.last().unwrap(),
                bins: limits.len() - 1,
            }
        } else {
            BinLimits::Unequal { limits }
        }
    }

    /// Returns the bin index for observable `value`. If the value over- or underflows, the return
    /// value is `Option::None`.
    pub fn index(&self, value: f64) -> Option<usize> {
        match self {
            BinLimits::Equal { left, right, bins } => {
                if value < *left || value > *right {
                    None
                } else {
                    Some(((value - left) / (right - left) * *bins as f64) as usize)
                }
            }
            BinLimits::Unequal { limits } => {
                let index = limits
                    .binary_search_by(|left| {
                        if left < &value {
                            Ordering::Less
                        } else {
                            Ordering::Greater
                        }
                    })
                    .unwrap_or_else(|e| e);

                if index == 0 || index == limits.len() {
                    None
                } else {
                    Some(index - 1)
                }
            }
        }
    }

    /// Returns the number of bins.
    pub fn bins(&self) -> usize {
        match self {
            BinLimits::Equal { bins, .. } => *bins,
            BinLimits::Unequal { limits } => limits.len() - 1,
        }
    }

    /// Returns `true`, if `self` is `BinLimits::Equal` and `false` otherwise.
    pub fn is_equal(&self) -> bool {
        match self {
            BinLimits::Equal { .. } => true,
            BinLimits::Unequal { .. } => false,
        }
    }

    /// Returns `true`, if `self` is `BinLimits::Unequal` and `false` otherwise.
    pub fn is_unequal(&self) -> bool {
        !self.is_equal()
    }
}
