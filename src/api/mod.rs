//! Operations invoked by the presentation layer, one module per resource.
//!
//! Every mutation runs its policy and permission checks before the store is
//! touched; a rejection leaves system state unchanged.

pub mod admin;
pub mod advance;
pub mod attendance;
pub mod employee;
pub mod payout;
pub mod payroll;
pub mod project;
