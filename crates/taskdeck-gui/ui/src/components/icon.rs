use yew::{
  Classes,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(
  Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum IconName {
  LayoutGrid,
  Plus,
  Search,
  List,
  Board,
  Calendar,
  ChevronDown,
  Close
}

impl IconName {
  fn glyph(self) -> &'static str {
    match self {
      | Self::LayoutGrid => "▦",
      | Self::Plus => "+",
      | Self::Search => "⌕",
      | Self::List => "☰",
      | Self::Board => "⊞",
      | Self::Calendar => "▤",
      | Self::ChevronDown => "▾",
      | Self::Close => "×"
    }
  }

  fn key(self) -> &'static str {
    match self {
      | Self::LayoutGrid => "layout-grid",
      | Self::Plus => "plus",
      | Self::Search => "search",
      | Self::List => "list",
      | Self::Board => "board",
      | Self::Calendar => "calendar",
      | Self::ChevronDown => {
        "chevron-down"
      }
      | Self::Close => "close"
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
  pub name:  IconName,
  #[prop_or_default]
  pub class: Classes
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
  html! {
      <span
          class={classes!("icon", format!("icon-{}", props.name.key()), props.class.clone())}
          aria-hidden="true"
      >
          { props.name.glyph() }
      </span>
  }
}
