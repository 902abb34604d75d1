use crate::settings::{
  FilterSettings,
  FilterValues,
  HeaderConfig,
  SortSettings
};
use crate::view::{
  Layout,
  TaskCounts,
  TaskView
};

/// Everything the header can ask of the
/// page that owns it.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderMsg {
  SetLayout(Layout),
  SetTaskView(TaskView),
  CreateTask,
  SetFilterSettings(FilterSettings),
  SetSortSettings(SortSettings),
  SetFilterValues(FilterValues)
}

impl HeaderMsg {
  pub fn kind(&self) -> &'static str {
    match self {
      | Self::SetLayout(_) => {
        "set_layout"
      }
      | Self::SetTaskView(_) => {
        "set_task_view"
      }
      | Self::CreateTask => {
        "create_task"
      }
      | Self::SetFilterSettings(_) => {
        "set_filter_settings"
      }
      | Self::SetSortSettings(_) => {
        "set_sort_settings"
      }
      | Self::SetFilterValues(_) => {
        "set_filter_values"
      }
    }
  }
}

/// Page-level state the header reads from
/// and writes back to.
#[derive(
  Debug, Clone, PartialEq, Default,
)]
pub struct TasksPageState {
  pub counts:        TaskCounts,
  pub layout:        Layout,
  pub task_view:     TaskView,
  /// Task composer toggled by the create
  /// button; drives the icon rotation.
  pub composing:     bool,
  pub filters:       FilterSettings,
  pub sort:          SortSettings,
  pub filter_values: FilterValues
}

impl TasksPageState {
  pub fn from_config(
    config: HeaderConfig,
    counts: TaskCounts
  ) -> Self {
    Self {
      counts,
      layout: config.layout,
      task_view: config.task_view,
      composing: false,
      filters: config.filters,
      sort: config.sort,
      filter_values: config
        .filter_values
    }
  }

  pub fn apply(
    &mut self,
    msg: HeaderMsg
  ) {
    tracing::debug!(
      kind = msg.kind(),
      "applying header message"
    );
    match msg {
      | HeaderMsg::SetLayout(layout) => {
        self.layout = layout
      }
      | HeaderMsg::SetTaskView(view) => {
        self.task_view = view
      }
      | HeaderMsg::CreateTask => {
        self.composing = !self.composing
      }
      | HeaderMsg::SetFilterSettings(
        filters
      ) => self.filters = filters,
      | HeaderMsg::SetSortSettings(
        sort
      ) => self.sort = sort,
      | HeaderMsg::SetFilterValues(
        values
      ) => self.filter_values = values
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::settings::SortKey;

  #[test]
  fn create_task_toggles_composing() {
    let mut state =
      TasksPageState::default();
    state.apply(HeaderMsg::CreateTask);
    assert!(state.composing);
    state.apply(HeaderMsg::CreateTask);
    assert!(!state.composing);
  }

  #[test]
  fn messages_touch_only_their_field() {
    let mut state =
      TasksPageState::default();
    let before = state.clone();

    state.apply(HeaderMsg::SetLayout(
      Layout::Calendar
    ));
    assert_eq!(
      state.layout,
      Layout::Calendar
    );
    assert_eq!(
      state.task_view,
      before.task_view
    );
    assert_eq!(state.sort, before.sort);

    let sort = SortSettings::default()
      .toggled(SortKey::Chats);
    state.apply(
      HeaderMsg::SetSortSettings(sort)
    );
    assert_eq!(state.sort, sort);
    assert_eq!(
      state.layout,
      Layout::Calendar
    );
  }

  #[test]
  fn config_seeds_initial_state() {
    let config = HeaderConfig {
      layout: Layout::Board,
      task_view: TaskView::Drafts,
      ..HeaderConfig::default()
    };
    let counts = TaskCounts {
      total: 3,
      ..TaskCounts::default()
    };
    let state =
      TasksPageState::from_config(
        config, counts
      );
    assert_eq!(
      state.layout,
      Layout::Board
    );
    assert_eq!(
      state.task_view,
      TaskView::Drafts
    );
    assert_eq!(state.counts.total, 3);
    assert!(!state.composing);
  }
}
