use taskdeck_gui_shared::{
  FilterKey,
  FilterSettings,
  FilterValues
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
use crate::filters::{
  InlineDateFilter,
  InlineLabelFilter,
  InlinePriorityFilter
};

#[derive(Properties, PartialEq)]
pub struct FilterGroupProps {
  pub collapsed:        bool,
  pub on_toggle_collapsed:
    Callback<MouseEvent>,
  pub settings:         FilterSettings,
  #[prop_or_default]
  pub on_set_settings:
    Option<Callback<FilterSettings>>,
  pub values:           FilterValues,
  #[prop_or_default]
  pub on_set_values:
    Option<Callback<FilterValues>>
}

#[function_component(FilterGroup)]
pub fn filter_group(
  props: &FilterGroupProps
) -> Html {
  let inline_filter = |key: FilterKey| {
    if !props.settings.is_on(key) {
      return html! {};
    }
    let values = props.values.clone();
    let on_change =
      props.on_set_values.clone();
    match key {
      | FilterKey::Date => html! {
          <InlineDateFilter {values} {on_change} />
      },
      | FilterKey::Priority => html! {
          <InlinePriorityFilter {values} {on_change} />
      },
      | FilterKey::Label => html! {
          <InlineLabelFilter {values} {on_change} />
      }
    }
  };

  html! {
      <div class={classes!("collapsible", (!props.collapsed).then_some("open"))}>
          <button
              class="collapsible-trigger"
              aria-expanded={if props.collapsed { "false" } else { "true" }}
              onclick={props.on_toggle_collapsed.clone()}
          >
              <span>{ "Filter" }</span>
              <Icon name={IconName::ChevronDown} class={classes!("chevron", (!props.collapsed).then_some("rotated"))} />
          </button>
          {
              if props.collapsed {
                  html! {}
              } else {
                  html! {
                      <div class="collapsible-content">
                          {
                              for FilterKey::all().into_iter().map(|key| html! {
                                  <div class="filter-entry">
                                      <ToggleRow
                                          label={key.label()}
                                          is_on={props.settings.is_on(key)}
                                          disabled={props.on_set_settings.is_none()}
                                          on_toggle={optional_setter::<_, MouseEvent>(
                                              props.on_set_settings.as_ref(),
                                              props.settings.toggled(key)
                                          )}
                                      />
                                      { inline_filter(key) }
                                  </div>
                              })
                          }
                      </div>
                  }
              }
          }
      </div>
  }
}
