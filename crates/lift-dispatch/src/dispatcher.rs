//! The `Dispatcher` trait: the extension point for call assignment.

use lift_car::Lift;
use lift_core::{Call, FloorRange, LiftIndex};

/// Pluggable call-assignment policy.
///
/// Called once per unassigned call per tick, before any lift moves.  The
/// roster is read-only; returning `None` leaves the call pending and it is
/// offered again next tick, so a policy never has to force a choice.
///
/// # Example
///
/// ```rust,ignore
/// /// Always hand calls to the first lift in the roster.
/// struct FirstLift;
///
/// impl Dispatcher for FirstLift {
///     fn select(&self, _call: &Call, lifts: &[Lift], _floors: &FloorRange) -> Option<LiftIndex> {
///         (!lifts.is_empty()).then_some(LiftIndex(0))
///     }
/// }
/// ```
pub trait Dispatcher {
    /// Choose the lift that should serve `call`, as an index into `lifts`.
    fn select(&self, call: &Call, lifts: &[Lift], floors: &FloorRange) -> Option<LiftIndex>;
}
