use taskdeck_gui_shared::{
  BREADCRUMB_SEPARATOR,
  HEADING_TITLE,
  Heading,
  TaskView
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

use super::select_on_click;

#[derive(Properties, PartialEq)]
pub struct TasksHeadingProps {
  pub current:   TaskView,
  pub on_select: Callback<TaskView>
}

#[function_component(TasksHeading)]
pub fn tasks_heading(
  props: &TasksHeadingProps
) -> Html {
  let heading =
    Heading::for_view(props.current);

  html! {
      <div class="tasks-heading-wrap">
          <h1 class={classes!("tasks-heading", heading.is_breadcrumb().then_some("filtered"))}>
              {
                  match heading.current_segment() {
                      None => html! { <>{ heading.text() }</> },
                      Some(segment) => html! {
                          <span class="breadcrumb">
                              <span
                                  class="breadcrumb-back"
                                  role="link"
                                  onclick={select_on_click::<_, MouseEvent>(&props.on_select, Heading::BACK_TARGET)}
                              >
                                  { HEADING_TITLE }
                              </span>
                              <span class="breadcrumb-current">
                                  { format!("{BREADCRUMB_SEPARATOR}{segment}") }
                              </span>
                          </span>
                      }
                  }
              }
          </h1>
      </div>
  }
}
