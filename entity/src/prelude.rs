pub use super::attendance::Entity as Attendance;
pub use super::employee::Entity as Employee;
pub use super::notification::Entity as Notification;
pub use super::payroll::Entity as Payroll;
pub use super::performance_review::Entity as PerformanceReview;
pub use super::report::Entity as Report;
pub use super::role::Entity as Role;
pub use super::task::Entity as Task;
