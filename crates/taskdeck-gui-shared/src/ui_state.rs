/// Ephemeral flags owned by a mounted
/// header. Each one changes only through
/// its own control.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct HeaderUiState {
  pub display_open:     bool,
  pub sort_collapsed:   bool,
  pub filter_collapsed: bool
}

impl Default for HeaderUiState {
  fn default() -> Self {
    Self {
      display_open:     false,
      sort_collapsed:   true,
      filter_collapsed: true
    }
  }
}

impl HeaderUiState {
  pub fn set_display_open(
    self,
    open: bool
  ) -> Self {
    Self {
      display_open: open,
      ..self
    }
  }

  pub fn toggle_display(self) -> Self {
    self.set_display_open(
      !self.display_open
    )
  }

  pub fn toggle_sort(self) -> Self {
    Self {
      sort_collapsed: !self
        .sort_collapsed,
      ..self
    }
  }

  pub fn toggle_filter(self) -> Self {
    Self {
      filter_collapsed: !self
        .filter_collapsed,
      ..self
    }
  }
}
