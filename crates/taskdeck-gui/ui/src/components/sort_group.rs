use taskdeck_gui_shared::{
  SortKey,
  SortSettings
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

use super::{
  Icon,
  IconName,
  ToggleRow,
  optional_setter
};

#[derive(Properties, PartialEq)]
pub struct SortGroupProps {
  pub collapsed:        bool,
  pub on_toggle_collapsed:
    Callback<MouseEvent>,
  pub settings:         SortSettings,
  #[prop_or_default]
  pub on_set_settings:
    Option<Callback<SortSettings>>
}

#[function_component(SortGroup)]
pub fn sort_group(
  props: &SortGroupProps
) -> Html {
  html! {
      <div class={classes!("collapsible", (!props.collapsed).then_some("open"))}>
          <button
              class="collapsible-trigger"
              aria-expanded={if props.collapsed { "false" } else { "true" }}
              onclick={props.on_toggle_collapsed.clone()}
          >
              <span>{ "Sort" }</span>
              <Icon name={IconName::ChevronDown} class={classes!("chevron", (!props.collapsed).then_some("rotated"))} />
          </button>
          {
              if props.collapsed {
                  html! {}
              } else {
                  html! {
                      <div class="collapsible-content">
                          {
                              for SortKey::all().into_iter().map(|key| html! {
                                  <ToggleRow
                                      label={key.label()}
                                      is_on={props.settings.is_on(key)}
                                      disabled={props.on_set_settings.is_none()}
                                      on_toggle={optional_setter::<_, MouseEvent>(
                                          props.on_set_settings.as_ref(),
                                          props.settings.toggled(key)
                                      )}
                                  />
                              })
                          }
                      </div>
                  }
              }
          }
      </div>
  }
}
