//! sea-orm entities for the employee directory.
//!
//! `role` and `employee` are parents; the remaining six tables each belong
//! to one employee through a non-null `employee_id`.

pub mod prelude;

pub mod attendance;
pub mod employee;
pub mod notification;
pub mod payroll;
pub mod performance_review;
pub mod report;
pub mod role;
pub mod task;
