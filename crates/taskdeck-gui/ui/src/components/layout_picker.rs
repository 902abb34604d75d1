use taskdeck_gui_shared::Layout;
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
  select_on_click
};

fn layout_icon(
  layout: Layout
) -> IconName {
  match layout {
    | Layout::List => IconName::List,
    | Layout::Board => IconName::Board,
    | Layout::Calendar => {
      IconName::Calendar
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct LayoutPickerProps {
  pub current:       Layout,
  pub on_set_layout: Callback<Layout>
}

#[function_component(LayoutPicker)]
pub fn layout_picker(
  props: &LayoutPickerProps
) -> Html {
  let layouts = Layout::all();
  let last = layouts.len() - 1;

  html! {
      <div class="display-section">
          <h3 class="display-section-title">{ "Layout" }</h3>
          <div class="layout-picker">
              {
                  for layouts.into_iter().enumerate().map(|(index, layout)| {
                      let is_active = props.current == layout;
                      let edge = if index == 0 {
                          Some("rounded-l")
                      } else if index == last {
                          Some("rounded-r")
                      } else {
                          None
                      };
                      html! {
                          <button
                              key={layout.as_key()}
                              class={classes!("layout-option", edge, is_active.then_some("active"))}
                              aria-pressed={if is_active { "true" } else { "false" }}
                              onclick={select_on_click::<_, MouseEvent>(&props.on_set_layout, layout)}
                          >
                              <Icon name={layout_icon(layout)} class={classes!("layout-option-icon")} />
                              <span class="layout-option-label">{ layout.label() }</span>
                          </button>
                      }
                  })
              }
          </div>
      </div>
  }
}
