use serde::{
  Deserialize,
  Serialize
};

/// Which subset of tasks the header
/// counts and heading reflect.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskView {
  #[default]
  Total,
  Drafts,
  Pending,
  Completed,
  Deleted
}

impl TaskView {
  pub fn all() -> [Self; 5] {
    [
      Self::Total,
      Self::Drafts,
      Self::Pending,
      Self::Completed,
      Self::Deleted
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Total => "total",
      | Self::Drafts => "drafts",
      | Self::Pending => "pending",
      | Self::Completed => {
        "completed"
      }
      | Self::Deleted => "deleted"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "total" => Some(Self::Total),
      | "drafts" => Some(Self::Drafts),
      | "pending" => {
        Some(Self::Pending)
      }
      | "completed" => {
        Some(Self::Completed)
      }
      | "deleted" => {
        Some(Self::Deleted)
      }
      | _ => None
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Total => "Total",
      | Self::Drafts => "Drafts",
      | Self::Pending => "Pending",
      | Self::Completed => {
        "Completed"
      }
      | Self::Deleted => "Deleted"
    }
  }

  /// Breadcrumb form of the key: first
  /// character upper-cased, the rest kept.
  pub fn title(self) -> String {
    capitalize(self.as_key())
  }

  pub fn color(self) -> &'static str {
    match self {
      | Self::Total => "#ffffff",
      | Self::Drafts => "#C4B5FD",
      | Self::Pending => "#f59e0b",
      | Self::Completed => "#10B981",
      | Self::Deleted => "#F87171"
    }
  }
}

impl std::fmt::Display for TaskView {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>
  ) -> std::fmt::Result {
    f.write_str(self.as_key())
  }
}

fn capitalize(value: &str) -> String {
  let mut chars = value.chars();
  match chars.next() {
    | Some(first) => {
      let mut out = first
        .to_uppercase()
        .collect::<String>();
      out.push_str(chars.as_str());
      out
    }
    | None => String::new()
  }
}

/// How tasks are arranged below the
/// header.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
  #[default]
  List,
  Board,
  Calendar
}

impl Layout {
  pub fn all() -> [Self; 3] {
    [
      Self::List,
      Self::Board,
      Self::Calendar
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::List => "list",
      | Self::Board => "board",
      | Self::Calendar => "calendar"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "list" => Some(Self::List),
      | "board" => Some(Self::Board),
      | "calendar" => {
        Some(Self::Calendar)
      }
      | _ => None
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::List => "List",
      | Self::Board => "Board",
      | Self::Calendar => "Calendar"
    }
  }
}

impl std::fmt::Display for Layout {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>
  ) -> std::fmt::Result {
    f.write_str(self.as_key())
  }
}

/// Totals supplied by the parent. Shown
/// literally, never clamped.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(default)]
pub struct TaskCounts {
  pub total:     u32,
  pub drafts:    u32,
  pub pending:   u32,
  pub completed: u32,
  pub deleted:   u32
}

impl TaskCounts {
  pub fn count_for(
    &self,
    view: TaskView
  ) -> u32 {
    match view {
      | TaskView::Total => self.total,
      | TaskView::Drafts => self.drafts,
      | TaskView::Pending => {
        self.pending
      }
      | TaskView::Completed => {
        self.completed
      }
      | TaskView::Deleted => {
        self.deleted
      }
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Indicator {
  pub view:   TaskView,
  pub count:  u32,
  pub color:  &'static str,
  pub label:  &'static str,
  pub active: bool
}

impl Indicator {
  /// Inline style for the count: always
  /// the indicator color, underline only
  /// when active.
  pub fn underline_style(
    &self
  ) -> String {
    let border = if self.active {
      self.color
    } else {
      "transparent"
    };
    format!(
      "color: {}; border-bottom: 2px \
       solid {border};",
      self.color
    )
  }
}

pub fn indicators(
  counts: &TaskCounts,
  current: TaskView
) -> [Indicator; 5] {
  TaskView::all().map(|view| {
    Indicator {
      view,
      count: counts.count_for(view),
      color: view.color(),
      label: view.label(),
      active: view == current
    }
  })
}
