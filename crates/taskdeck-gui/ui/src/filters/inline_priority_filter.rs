use taskdeck_gui_shared::{
  FilterValues,
  Priority
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

use crate::components::optional_setter;

#[derive(Properties, PartialEq)]
pub struct InlinePriorityFilterProps {
  pub values:    FilterValues,
  #[prop_or_default]
  pub on_change:
    Option<Callback<FilterValues>>
}

#[function_component(
  InlinePriorityFilter
)]
pub fn inline_priority_filter(
  props: &InlinePriorityFilterProps
) -> Html {
  html! {
      <div class="inline-filter inline-priority-filter">
          {
              for Priority::all().into_iter().map(|priority| {
                  let selected = props.values.priorities.contains(&priority);
                  html! {
                      <button
                          class={classes!("chip", format!("priority-{}", priority.as_key()), selected.then_some("selected"))}
                          aria-pressed={if selected { "true" } else { "false" }}
                          disabled={props.on_change.is_none()}
                          onclick={optional_setter::<_, MouseEvent>(
                              props.on_change.as_ref(),
                              props.values.toggle_priority(priority)
                          )}
                      >
                          { priority.label() }
                      </button>
                  }
              })
          }
      </div>
  }
}
