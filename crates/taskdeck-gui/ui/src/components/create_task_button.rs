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
  IconName
};

/// Rotation classes for the plus icon.
/// Only presentation depends on the flag.
pub fn rotation_class(
  is_rotated: bool
) -> &'static str {
  if is_rotated {
    "rotate-180 scale-110"
  } else {
    "rotate-0 scale-100"
  }
}

#[derive(Properties, PartialEq)]
pub struct CreateTaskButtonProps {
  pub is_rotated: bool,
  pub onclick:    Callback<MouseEvent>
}

#[function_component(CreateTaskButton)]
pub fn create_task_button(
  props: &CreateTaskButtonProps
) -> Html {
  html! {
      <button
          class="round-button create-task"
          aria-label="Create task"
          onclick={props.onclick.clone()}
      >
          <Icon
              name={IconName::Plus}
              class={classes!("create-icon", rotation_class(props.is_rotated))}
          />
      </button>
  }
}
