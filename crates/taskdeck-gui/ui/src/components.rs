mod count_indicators;
mod create_task_button;
mod display_options;
mod filter_group;
mod icon;
mod layout_picker;
mod search_box;
mod sort_group;
mod tasks_header;
mod tasks_heading;
mod toggle_row;

pub use count_indicators::CountIndicators;
pub use create_task_button::CreateTaskButton;
pub use display_options::DisplayOptions;
pub use filter_group::FilterGroup;
pub use icon::{
  Icon,
  IconName
};
pub use layout_picker::LayoutPicker;
pub use search_box::SearchBox;
pub use sort_group::SortGroup;
pub use tasks_header::TasksHeader;
pub use tasks_heading::TasksHeading;
pub use toggle_row::ToggleRow;
use yew::Callback;

/// Click handler that forwards a fixed
/// value to `on_select`, once per click.
pub fn select_on_click<T, E>(
  on_select: &Callback<T>,
  value: T
) -> Callback<E>
where
  T: Clone + 'static,
  E: 'static
{
  on_select
    .reform(move |_: E| value.clone())
}

/// Emits through `setter` when present;
/// inert otherwise.
pub fn optional_setter<T, E>(
  setter: Option<&Callback<T>>,
  value: T
) -> Callback<E>
where
  T: Clone + 'static,
  E: 'static
{
  match setter {
    | Some(setter) => {
      select_on_click(setter, value)
    }
    | None => Callback::noop()
  }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;
  use std::rc::Rc;

  use taskdeck_gui_shared::{
    Heading,
    Layout,
    TaskView
  };

  use super::*;

  fn recorder<T: 'static>()
  -> (Callback<T>, Rc<RefCell<Vec<T>>>)
  {
    let calls =
      Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    let callback =
      Callback::from(move |value: T| {
        sink.borrow_mut().push(value)
      });
    (callback, calls)
  }

  #[test]
  fn indicator_click_emits_its_view_once()
  {
    for view in TaskView::all() {
      let (on_select, calls) =
        recorder::<TaskView>();
      let onclick: Callback<()> =
        select_on_click(&on_select, view);
      onclick.emit(());
      assert_eq!(
        *calls.borrow(),
        vec![view]
      );
    }
  }

  #[test]
  fn layout_click_emits_only_that_layout()
  {
    for layout in Layout::all() {
      let (on_set, calls) =
        recorder::<Layout>();
      let onclick: Callback<()> =
        select_on_click(&on_set, layout);
      onclick.emit(());
      assert_eq!(
        *calls.borrow(),
        vec![layout]
      );
    }
  }

  #[test]
  fn breadcrumb_click_targets_total() {
    let (on_select, calls) =
      recorder::<TaskView>();
    let onclick: Callback<()> =
      select_on_click(
        &on_select,
        Heading::BACK_TARGET
      );
    onclick.emit(());
    onclick.emit(());
    assert_eq!(
      *calls.borrow(),
      vec![TaskView::Total, TaskView::Total]
    );
  }

  #[test]
  fn missing_setter_is_inert() {
    let onclick: Callback<()> =
      optional_setter::<Layout, ()>(
        None,
        Layout::Board
      );
    onclick.emit(());

    let (on_set, calls) =
      recorder::<Layout>();
    let onclick: Callback<()> =
      optional_setter(
        Some(&on_set),
        Layout::Board
      );
    onclick.emit(());
    assert_eq!(
      *calls.borrow(),
      vec![Layout::Board]
    );
  }
}
