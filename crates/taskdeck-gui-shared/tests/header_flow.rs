use taskdeck_gui_shared::{
    FilterKey, FilterValues, HeaderConfig, HeaderMsg, Heading, Layout, Priority, TaskCounts,
    TaskView, TasksPageState, indicators,
};

fn scenario_counts() -> TaskCounts {
    TaskCounts {
        total: 12,
        drafts: 2,
        pending: 5,
        completed: 4,
        deleted: 1,
    }
}

#[test]
fn pending_scenario_renders_counts_and_breadcrumb() {
    let mut state = TasksPageState::from_config(HeaderConfig::default(), scenario_counts());
    state.apply(HeaderMsg::SetTaskView(TaskView::Pending));

    let row = indicators(&state.counts, state.task_view);
    let counts: Vec<String> = row.iter().map(|i| i.count.to_string()).collect();
    assert_eq!(counts.join("/"), "12/2/5/4/1");

    let underlined: Vec<u32> = row.iter().filter(|i| i.active).map(|i| i.count).collect();
    assert_eq!(underlined, vec![5]);

    assert_eq!(Heading::for_view(state.task_view).text(), "Tasks > Pending");
}

#[test]
fn breadcrumb_back_always_returns_to_total() {
    for start in TaskView::all() {
        let mut state = TasksPageState::from_config(HeaderConfig::default(), scenario_counts());
        state.apply(HeaderMsg::SetTaskView(start));
        state.apply(HeaderMsg::SetTaskView(Heading::BACK_TARGET));
        assert_eq!(state.task_view, TaskView::Total);
        assert_eq!(Heading::for_view(state.task_view).text(), "Tasks");
    }
}

#[test]
fn filter_flow_updates_settings_and_values() {
    let mut state = TasksPageState::default();

    let filters = state.filters.toggled(FilterKey::Priority);
    state.apply(HeaderMsg::SetFilterSettings(filters));
    assert!(state.filters.priority);

    let values = state.filter_values.toggle_priority(Priority::High);
    state.apply(HeaderMsg::SetFilterValues(values));
    assert_eq!(state.filter_values.priorities, vec![Priority::High]);

    state.apply(HeaderMsg::SetLayout(Layout::Board));
    assert_eq!(state.layout, Layout::Board);
    assert_eq!(state.filter_values.priorities, vec![Priority::High]);
}

#[test]
fn enums_serialize_as_lowercase_keys() {
    let view = serde_json::to_string(&TaskView::Completed).expect("serialize view");
    assert_eq!(view, "\"completed\"");

    let layout: Layout = serde_json::from_str("\"calendar\"").expect("deserialize layout");
    assert_eq!(layout, Layout::Calendar);

    let values: FilterValues =
        serde_json::from_str(r#"{"date":"this-week"}"#).expect("deserialize filter values");
    assert_eq!(values.date.as_key(), "this-week");
    assert!(values.priorities.is_empty());
    assert!(values.labels.is_empty());
}

#[test]
fn missing_config_objects_fall_back_to_defaults() {
    let config: HeaderConfig = serde_json::from_str("{}").expect("deserialize empty config");
    assert_eq!(config, HeaderConfig::default());
    assert!(config.sort.creation_date);
    assert!(!config.filters.date);
}
