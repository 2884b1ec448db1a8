//! Error types for simulation construction
//!
//! The core itself is pure arithmetic over validated inputs, so the only
//! failures are precondition violations at construction or reconfiguration
//! time. Degenerate numeric states (zero elapsed time, no overlap) are
//! handled as no-ops, not errors.

use thiserror::Error;

/// Invalid construction or reconfiguration argument
///
/// Raised when a body or simulation is built from parameters outside their
/// documented bounds. The caller (typically UI slider plumbing) decides
/// whether to clamp input before it reaches the core; the core itself
/// rejects rather than silently correcting.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    /// Sphere radius must be strictly positive; it doubles as the collision
    /// mass proxy, so a zero radius would make the mass sum degenerate.
    #[error("sphere radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    /// A sphere needs at least 3 sectors to enclose volume
    #[error("sector count must be at least 3, got {0}")]
    TooFewSectors(u32),

    /// A sphere needs at least 2 stacks (one ring per hemisphere)
    #[error("stack count must be at least 2, got {0}")]
    TooFewStacks(u32),
}
