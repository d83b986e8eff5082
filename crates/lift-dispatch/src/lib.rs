//! `lift-dispatch`: deciding which lift answers a hall call, and remembering
//! the decision.
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`dispatcher`]   | `Dispatcher` trait: the pluggable selection policy        |
//! | [`cost`]         | `CostDispatcher`: tiered lowest-cost policy, `Tier`       |
//! | [`assignment`]   | `Assignment`, `AssignmentTable`                            |
//!
//! Dispatchers are pure: they read the roster and return a lift index.
//! Recording the binding is the caller's job, through the
//! [`AssignmentTable`] it owns.

pub mod assignment;
pub mod cost;
pub mod dispatcher;


pub use assignment::{Assignment, AssignmentTable};
pub use cost::{CostDispatcher, Tier};
pub use dispatcher::Dispatcher;
