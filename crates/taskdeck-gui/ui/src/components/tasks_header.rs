use taskdeck_gui_shared::{
  FilterSettings,
  FilterValues,
  HeaderUiState,
  Layout,
  SortSettings,
  TaskCounts,
  TaskView
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_state
};

use super::{
  CountIndicators,
  CreateTaskButton,
  DisplayOptions,
  SearchBox,
  TasksHeading
};

/// Header contract. Sort and filter props
/// are optional and fall back to their
/// `Default` values.
#[derive(Properties, PartialEq)]
pub struct TasksHeaderProps {
  pub counts:                 TaskCounts,
  pub current_layout:         Layout,
  pub on_set_layout:
    Callback<Layout>,
  pub current_task_view:      TaskView,
  pub on_set_task_view:
    Callback<TaskView>,
  pub on_create_task:
    Callback<MouseEvent>,
  pub is_rotated:             bool,
  #[prop_or_default]
  pub filter_settings:        FilterSettings,
  #[prop_or_default]
  pub on_set_filter_settings:
    Option<Callback<FilterSettings>>,
  #[prop_or_default]
  pub sort_settings:          SortSettings,
  #[prop_or_default]
  pub on_set_sort_settings:
    Option<Callback<SortSettings>>,
  #[prop_or_default]
  pub filter_values:          FilterValues,
  #[prop_or_default]
  pub on_set_filter_values:
    Option<Callback<FilterValues>>
}

#[function_component(TasksHeader)]
pub fn tasks_header(
  props: &TasksHeaderProps
) -> Html {
  let ui_state =
    use_state(HeaderUiState::default);

  let on_ui_change = {
    let ui_state = ui_state.clone();
    Callback::from(
      move |next: HeaderUiState| {
        tracing::trace!(
          display_open = next.display_open,
          sort_collapsed = next.sort_collapsed,
          filter_collapsed = next.filter_collapsed,
          "header ui state changed"
        );
        ui_state.set(next);
      }
    )
  };

  html! {
      <>
          <div class="tasks-header">
              <div class="header-controls">
                  <DisplayOptions
                      ui_state={*ui_state}
                      {on_ui_change}
                      current_layout={props.current_layout}
                      on_set_layout={props.on_set_layout.clone()}
                      filter_settings={props.filter_settings}
                      on_set_filter_settings={props.on_set_filter_settings.clone()}
                      sort_settings={props.sort_settings}
                      on_set_sort_settings={props.on_set_sort_settings.clone()}
                      filter_values={props.filter_values.clone()}
                      on_set_filter_values={props.on_set_filter_values.clone()}
                  />
                  <CreateTaskButton
                      is_rotated={props.is_rotated}
                      onclick={props.on_create_task.clone()}
                  />
                  <SearchBox />
              </div>
              <CountIndicators
                  counts={props.counts}
                  current={props.current_task_view}
                  on_select={props.on_set_task_view.clone()}
              />
          </div>
          <TasksHeading
              current={props.current_task_view}
              on_select={props.on_set_task_view.clone()}
          />
      </>
  }
}

#[cfg(test)]
mod tests {
  use yew::ServerRenderer;

  use super::*;

  fn scenario_props(
    current: TaskView,
    is_rotated: bool
  ) -> TasksHeaderProps {
    TasksHeaderProps {
      counts: TaskCounts {
        total:     12,
        drafts:    2,
        pending:   5,
        completed: 4,
        deleted:   1
      },
      current_layout: Layout::List,
      on_set_layout: Callback::noop(),
      current_task_view: current,
      on_set_task_view: Callback::noop(),
      on_create_task: Callback::noop(),
      is_rotated,
      filter_settings:
        FilterSettings::default(),
      on_set_filter_settings: None,
      sort_settings: SortSettings::default(
      ),
      on_set_sort_settings: None,
      filter_values: FilterValues::default(
      ),
      on_set_filter_values: None
    }
  }

  async fn render_header(
    current: TaskView,
    is_rotated: bool
  ) -> String {
    ServerRenderer::<TasksHeader>::with_props(
      move || {
        scenario_props(
          current, is_rotated
        )
      }
    )
    .hydratable(false)
    .render()
    .await
  }

  #[tokio::test]
  async fn pending_scenario_underlines_pending_count()
  {
    let html = render_header(
      TaskView::Pending,
      false
    )
    .await;

    for count in ["12", "2", "5", "4", "1"]
    {
      assert!(
        html.contains(&format!(
          ">{count}</span>"
        )),
        "missing count {count} in {html}"
      );
    }
    assert!(html.contains(
      "border-bottom: 2px solid \
       #f59e0b;"
    ));
    assert_eq!(
      html
        .matches(
          "2px solid transparent"
        )
        .count(),
      4
    );
    assert!(
      html.contains("breadcrumb-back")
    );
    assert!(html.contains(
      "tasks-heading filtered"
    ));
    assert!(
      html.contains("&gt; Pending")
        || html.contains("> Pending")
    );
  }

  #[tokio::test]
  async fn total_view_renders_plain_title()
  {
    let html = render_header(
      TaskView::Total,
      false
    )
    .await;

    assert!(html.contains(
      "<h1 class=\"tasks-heading\">\
       Tasks</h1>"
    ));
    assert!(!html.contains("breadcrumb"));
  }

  #[tokio::test]
  async fn rotation_changes_only_icon_class()
  {
    let idle = render_header(
      TaskView::Total,
      false
    )
    .await;
    let rotated = render_header(
      TaskView::Total,
      true
    )
    .await;

    assert!(
      idle.contains("rotate-0 scale-100")
    );
    assert!(
      rotated
        .contains("rotate-180 scale-110")
    );
    assert_eq!(
      idle.replace(
        "rotate-0 scale-100",
        "ROTATION"
      ),
      rotated.replace(
        "rotate-180 scale-110",
        "ROTATION"
      )
    );
  }

  #[tokio::test]
  async fn display_options_start_closed()
  {
    let html = render_header(
      TaskView::Drafts,
      false
    )
    .await;

    assert!(
      !html.contains("popover-content")
    );
    assert!(
      html.contains("placeholder=\"/+T\"")
    );
  }
}
