pub mod advance;
pub mod attendance;
pub mod employee;
pub mod ids;
pub mod month;
pub mod payout;
pub mod project;

pub use advance::AdvanceEntry;
pub use attendance::{AttendanceEntry, AttendanceStatus};
pub use employee::{AccessLevel, Employee};
pub use ids::{AdvanceId, AttendanceId, EmployeeId, PayoutId, ProjectId, UNKNOWN_LABEL};
pub use month::Month;
pub use payout::{PaymentMode, PayoutEntry};
pub use project::Project;
