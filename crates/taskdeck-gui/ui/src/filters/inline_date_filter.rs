use taskdeck_gui_shared::{
  DateFilter,
  FilterValues
};
use web_sys::{
  Event,
  HtmlSelectElement
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct InlineDateFilterProps {
  pub values:    FilterValues,
  #[prop_or_default]
  pub on_change:
    Option<Callback<FilterValues>>
}

#[function_component(InlineDateFilter)]
pub fn inline_date_filter(
  props: &InlineDateFilterProps
) -> Html {
  let onchange = {
    let values = props.values.clone();
    let on_change =
      props.on_change.clone();
    Callback::from(move |event: Event| {
      let Some(on_change) = &on_change
      else {
        return;
      };
      let select: HtmlSelectElement =
        event.target_unchecked_into();
      let date =
        DateFilter::from_key(
          &select.value()
        );
      on_change
        .emit(values.with_date(date));
    })
  };

  html! {
      <div class="inline-filter inline-date-filter">
          <select
              class="inline-select"
              disabled={props.on_change.is_none()}
              {onchange}
          >
              {
                  for DateFilter::all().into_iter().map(|date| html! {
                      <option
                          value={date.as_key()}
                          selected={props.values.date == date}
                      >
                          { date.label() }
                      </option>
                  })
              }
          </select>
      </div>
  }
}
