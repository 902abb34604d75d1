//! Inline filter controls mounted by the
//! header's filter group. Each one edits a
//! single field of `FilterValues` and hands
//! the whole updated value back.

mod inline_date_filter;
mod inline_label_filter;
mod inline_priority_filter;

pub use inline_date_filter::InlineDateFilter;
pub use inline_label_filter::InlineLabelFilter;
pub use inline_priority_filter::InlinePriorityFilter;
