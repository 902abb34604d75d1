use taskdeck_gui_shared::{
  FilterSettings,
  FilterValues,
  HeaderUiState,
  Layout,
  SortSettings
};
use web_sys::KeyboardEvent;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::{
  FilterGroup,
  Icon,
  IconName,
  LayoutPicker,
  SortGroup,
  select_on_click
};

/// Escape closes an open panel, whether
/// focus is on the trigger or inside it.
fn dismissed_by_key(
  key: &str,
  state: HeaderUiState
) -> Option<HeaderUiState> {
  (key == "Escape" && state.display_open)
    .then(|| state.set_display_open(false))
}

#[derive(Properties, PartialEq)]
pub struct DisplayOptionsProps {
  pub ui_state:         HeaderUiState,
  pub on_ui_change:
    Callback<HeaderUiState>,
  pub current_layout:   Layout,
  pub on_set_layout:    Callback<Layout>,
  pub filter_settings:  FilterSettings,
  #[prop_or_default]
  pub on_set_filter_settings:
    Option<Callback<FilterSettings>>,
  pub sort_settings:    SortSettings,
  #[prop_or_default]
  pub on_set_sort_settings:
    Option<Callback<SortSettings>>,
  pub filter_values:    FilterValues,
  #[prop_or_default]
  pub on_set_filter_values:
    Option<Callback<FilterValues>>
}

#[function_component(DisplayOptions)]
pub fn display_options(
  props: &DisplayOptionsProps
) -> Html {
  let state = props.ui_state;

  let on_trigger =
    select_on_click::<_, MouseEvent>(
      &props.on_ui_change,
      state.toggle_display()
    );
  let on_dismiss =
    select_on_click::<_, MouseEvent>(
      &props.on_ui_change,
      state.set_display_open(false)
    );
  let on_keydown = {
    let on_ui_change =
      props.on_ui_change.clone();
    Callback::from(
      move |event: KeyboardEvent| {
        if let Some(next) =
          dismissed_by_key(
            &event.key(),
            state
          )
        {
          on_ui_change.emit(next);
        }
      }
    )
  };

  html! {
      <div class="popover" onkeydown={on_keydown}>
          <button
              class="round-button"
              aria-haspopup="dialog"
              aria-expanded={if state.display_open { "true" } else { "false" }}
              onclick={on_trigger}
          >
              <Icon name={IconName::LayoutGrid} />
          </button>
          {
              if state.display_open {
                  html! {
                      <>
                          <div class="popover-backdrop" onclick={on_dismiss}></div>
                          <div class="popover-content display-options" role="dialog">
                              <LayoutPicker
                                  current={props.current_layout}
                                  on_set_layout={props.on_set_layout.clone()}
                              />
                              <div class="divider"></div>
                              <SortGroup
                                  collapsed={state.sort_collapsed}
                                  on_toggle_collapsed={select_on_click::<_, MouseEvent>(&props.on_ui_change, state.toggle_sort())}
                                  settings={props.sort_settings}
                                  on_set_settings={props.on_set_sort_settings.clone()}
                              />
                              <FilterGroup
                                  collapsed={state.filter_collapsed}
                                  on_toggle_collapsed={select_on_click::<_, MouseEvent>(&props.on_ui_change, state.toggle_filter())}
                                  settings={props.filter_settings}
                                  on_set_settings={props.on_set_filter_settings.clone()}
                                  values={props.filter_values.clone()}
                                  on_set_values={props.on_set_filter_values.clone()}
                              />
                          </div>
                      </>
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
