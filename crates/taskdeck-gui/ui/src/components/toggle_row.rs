use yew::{
  AttrValue,
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ToggleRowProps {
  pub label:     AttrValue,
  pub is_on:     bool,
  #[prop_or_default]
  pub disabled:  bool,
  pub on_toggle: Callback<MouseEvent>
}

#[function_component(ToggleRow)]
pub fn toggle_row(
  props: &ToggleRowProps
) -> Html {
  html! {
      <div class="toggle-row">
          <span class="toggle-label">{ props.label.clone() }</span>
          <button
              class={classes!("icon-toggle", props.is_on.then_some("on"))}
              role="switch"
              aria-checked={if props.is_on { "true" } else { "false" }}
              disabled={props.disabled}
              onclick={props.on_toggle.clone()}
          >
              <span class="icon-toggle-knob"></span>
          </button>
      </div>
  }
}
