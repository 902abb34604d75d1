use yew::{
  Html,
  function_component,
  html
};

use super::{
  Icon,
  IconName
};

/// Uncontrolled search field. Typing here
/// does not filter anything yet.
#[function_component(SearchBox)]
pub fn search_box() -> Html {
  html! {
      <div class="search-box">
          <Icon name={IconName::Search} class={yew::classes!("search-icon")} />
          <input
              class="search-input"
              type="text"
              placeholder="/+T"
              aria-label="Search tasks"
          />
      </div>
  }
}
