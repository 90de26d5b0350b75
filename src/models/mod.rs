pub mod event;
pub mod event_kind;
pub mod interval;
pub mod issue;
pub mod monthly;

pub use event::{Event, SourceRef};
pub use event_kind::EventKind;
pub use interval::Interval;
pub use issue::{Issue, IssueKind};
pub use monthly::MonthlyTotal;
