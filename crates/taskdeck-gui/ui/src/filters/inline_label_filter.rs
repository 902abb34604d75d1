use taskdeck_gui_shared::FilterValues;
use web_sys::{
  HtmlInputElement,
  InputEvent,
  KeyboardEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

use crate::components::{
  Icon,
  IconName,
  optional_setter
};

#[derive(Properties, PartialEq)]
pub struct InlineLabelFilterProps {
  pub values:    FilterValues,
  #[prop_or_default]
  pub on_change:
    Option<Callback<FilterValues>>
}

#[function_component(InlineLabelFilter)]
pub fn inline_label_filter(
  props: &InlineLabelFilterProps
) -> Html {
  let draft = use_state(String::new);

  let oninput = {
    let draft = draft.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        draft.set(input.value());
      }
    )
  };

  let onkeydown = {
    let draft = draft.clone();
    let values = props.values.clone();
    let on_change =
      props.on_change.clone();
    Callback::from(
      move |event: KeyboardEvent| {
        if event.key() != "Enter" {
          return;
        }
        event.prevent_default();
        let Some(on_change) = &on_change
        else {
          return;
        };
        let next =
          values.add_label(&draft);
        if next != values {
          on_change.emit(next);
        }
        draft.set(String::new());
      }
    )
  };

  html! {
      <div class="inline-filter inline-label-filter">
          <input
              class="inline-input"
              type="text"
              placeholder="Add label"
              value={(*draft).clone()}
              disabled={props.on_change.is_none()}
              {oninput}
              {onkeydown}
          />
          <div class="chip-row">
              {
                  for props.values.labels.iter().map(|label| html! {
                      <span class="chip selected" key={label.clone()}>
                          { label.clone() }
                          <button
                              class="chip-remove"
                              aria-label={format!("Remove label {label}")}
                              disabled={props.on_change.is_none()}
                              onclick={optional_setter::<_, MouseEvent>(
                                  props.on_change.as_ref(),
                                  props.values.remove_label(label)
                              )}
                          >
                              <Icon name={IconName::Close} />
                          </button>
                      </span>
                  })
              }
          </div>
      </div>
  }
}
