use std::rc::Rc;

use serde::Deserialize;
use taskdeck_gui_shared::{
  FilterSettings,
  FilterValues,
  HeaderConfig,
  HeaderMsg,
  Layout,
  SortSettings,
  TaskCounts,
  TaskView,
  TasksPageState
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Reducible,
  function_component,
  html,
  use_effect_with,
  use_reducer
};

use crate::components::TasksHeader;

const HEADER_CONFIG_TOML: &str =
  include_str!("../assets/header.toml");

#[derive(
  Debug, Clone, Default, Deserialize,
)]
struct CountsSeed {
  #[serde(default)]
  counts: TaskCounts
}

fn load_header_config() -> HeaderConfig {
  match HeaderConfig::from_toml_str(
    HEADER_CONFIG_TOML
  ) {
    | Ok(config) => {
      tracing::info!(
        layout = %config.layout,
        task_view = %config.task_view,
        "loaded header config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(%error, "failed parsing header config; using defaults");
      HeaderConfig::default()
    }
  }
}

fn load_seed_counts() -> TaskCounts {
  match toml::from_str::<CountsSeed>(
    HEADER_CONFIG_TOML
  ) {
    | Ok(seed) => seed.counts,
    | Err(error) => {
      tracing::error!(%error, "failed parsing seed counts; using zeros");
      TaskCounts::default()
    }
  }
}

/// Reducer wrapper so the page state can
/// live in `use_reducer`.
#[derive(Debug, Clone, PartialEq)]
struct PageStore(TasksPageState);

impl Reducible for PageStore {
  type Action = HeaderMsg;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = self.0.clone();
    next.apply(action);
    Rc::new(Self(next))
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let store = use_reducer(|| {
    PageStore(
      TasksPageState::from_config(
        load_header_config(),
        load_seed_counts()
      )
    )
  });

  {
    use_effect_with((), move |_| {
      tracing::info!(
        "tasks page mounted"
      );
      || ()
    });
  }

  {
    let task_view = store.0.task_view;
    use_effect_with(
      task_view,
      move |view| {
        tracing::debug!(
          view = %view,
          "task view changed"
        );
        || ()
      }
    );
  }

  let dispatcher = store.dispatcher();
  let on_set_layout = {
    let dispatcher = dispatcher.clone();
    Callback::from(
      move |layout: Layout| {
        dispatcher.dispatch(
          HeaderMsg::SetLayout(layout)
        )
      }
    )
  };
  let on_set_task_view = {
    let dispatcher = dispatcher.clone();
    Callback::from(
      move |view: TaskView| {
        dispatcher.dispatch(
          HeaderMsg::SetTaskView(view)
        )
      }
    )
  };
  let on_create_task = {
    let dispatcher = dispatcher.clone();
    Callback::from(
      move |_: MouseEvent| {
        dispatcher
          .dispatch(HeaderMsg::CreateTask)
      }
    )
  };
  let on_set_filter_settings = {
    let dispatcher = dispatcher.clone();
    Callback::from(
      move |filters: FilterSettings| {
        dispatcher.dispatch(
          HeaderMsg::SetFilterSettings(
            filters
          )
        )
      }
    )
  };
  let on_set_sort_settings = {
    let dispatcher = dispatcher.clone();
    Callback::from(
      move |sort: SortSettings| {
        dispatcher.dispatch(
          HeaderMsg::SetSortSettings(sort)
        )
      }
    )
  };
  let on_set_filter_values = {
    let dispatcher = dispatcher.clone();
    Callback::from(
      move |values: FilterValues| {
        dispatcher.dispatch(
          HeaderMsg::SetFilterValues(
            values
          )
        )
      }
    )
  };

  let page = &store.0;

  html! {
      <div class="tasks-page">
          <TasksHeader
              counts={page.counts}
              current_layout={page.layout}
              {on_set_layout}
              current_task_view={page.task_view}
              {on_set_task_view}
              {on_create_task}
              is_rotated={page.composing}
              filter_settings={page.filters}
              on_set_filter_settings={Some(on_set_filter_settings)}
              sort_settings={page.sort}
              on_set_sort_settings={Some(on_set_sort_settings)}
              filter_values={page.filter_values.clone()}
              on_set_filter_values={Some(on_set_filter_values)}
          />
          <main
              class="tasks-body"
              data-layout={page.layout.as_key()}
              data-view={page.task_view.as_key()}
          ></main>
      </div>
  }
}
