use taskdeck_gui_shared::{
  TaskCounts,
  TaskView,
  indicators
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
pub struct CountIndicatorsProps {
  pub counts:    TaskCounts,
  pub current:   TaskView,
  pub on_select: Callback<TaskView>
}

#[function_component(CountIndicators)]
pub fn count_indicators(
  props: &CountIndicatorsProps
) -> Html {
  html! {
      <div class="indicators">
          {
              for indicators(&props.counts, props.current).into_iter().map(|indicator| html! {
                  <button
                      key={indicator.view.as_key()}
                      class={classes!("indicator", indicator.active.then_some("active"))}
                      data-view={indicator.view.as_key()}
                      onclick={select_on_click::<_, MouseEvent>(&props.on_select, indicator.view)}
                  >
                      <span class="indicator-count" style={indicator.underline_style()}>
                          { indicator.count }
                      </span>
                      <span class="indicator-label">{ indicator.label }</span>
                  </button>
              })
          }
      </div>
  }
}
