//! Academic record entities: exam results and monthly attendance.

pub mod attendance;
pub mod result;

pub use attendance::AttendanceRecord;
pub use result::{ExamResult, Grade};
