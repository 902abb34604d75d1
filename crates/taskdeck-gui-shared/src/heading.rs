use crate::view::TaskView;

pub const HEADING_TITLE: &str = "Tasks";
pub const BREADCRUMB_SEPARATOR: &str =
  " > ";

/// The page heading: a plain title for
/// the total view, a breadcrumb back to it
/// for every other view.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Heading {
  Unfiltered,
  Filtered(TaskView)
}

impl Heading {
  /// Where the breadcrumb's title segment
  /// leads, whatever the current view.
  pub const BACK_TARGET: TaskView =
    TaskView::Total;

  pub fn for_view(
    view: TaskView
  ) -> Self {
    match view {
      | TaskView::Total => {
        Self::Unfiltered
      }
      | other => Self::Filtered(other)
    }
  }

  pub fn is_breadcrumb(&self) -> bool {
    matches!(self, Self::Filtered(_))
  }

  /// Trailing segment after the
  /// separator, if any.
  pub fn current_segment(
    &self
  ) -> Option<String> {
    match self {
      | Self::Unfiltered => None,
      | Self::Filtered(view) => {
        Some(view.title())
      }
    }
  }

  pub fn text(&self) -> String {
    match self.current_segment() {
      | None => HEADING_TITLE.to_string(),
      | Some(segment) => {
        format!(
          "{HEADING_TITLE}{BREADCRUMB_SEPARATOR}{segment}"
        )
      }
    }
  }
}
