//! Header types shared by the Taskdeck
//! frontend: view enums, settings with
//! their defaults, and the message seam
//! between the header and its page.

pub mod heading;
pub mod msg;
pub mod settings;
pub mod ui_state;
pub mod view;

pub use heading::{
  BREADCRUMB_SEPARATOR,
  HEADING_TITLE,
  Heading
};
pub use msg::{
  HeaderMsg,
  TasksPageState
};
pub use settings::{
  ConfigError,
  DateFilter,
  FilterKey,
  FilterSettings,
  FilterValues,
  HeaderConfig,
  Priority,
  SortKey,
  SortSettings
};
pub use ui_state::HeaderUiState;
pub use view::{
  Indicator,
  Layout,
  TaskCounts,
  TaskView,
  indicators
};
