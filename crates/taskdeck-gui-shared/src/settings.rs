use serde::{
  Deserialize,
  Serialize
};

use crate::view::{
  Layout,
  TaskView
};

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(default)]
pub struct FilterSettings {
  pub date:     bool,
  pub priority: bool,
  pub label:    bool
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
)]
pub enum FilterKey {
  Date,
  Priority,
  Label
}

impl FilterKey {
  pub fn all() -> [Self; 3] {
    [
      Self::Date,
      Self::Priority,
      Self::Label
    ]
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Date => "Date",
      | Self::Priority => "Priority",
      | Self::Label => "Label"
    }
  }
}

impl FilterSettings {
  pub fn is_on(
    &self,
    key: FilterKey
  ) -> bool {
    match key {
      | FilterKey::Date => self.date,
      | FilterKey::Priority => {
        self.priority
      }
      | FilterKey::Label => self.label
    }
  }

  /// Copy with only `key` flipped.
  pub fn toggled(
    mut self,
    key: FilterKey
  ) -> Self {
    match key {
      | FilterKey::Date => {
        self.date = !self.date
      }
      | FilterKey::Priority => {
        self.priority = !self.priority
      }
      | FilterKey::Label => {
        self.label = !self.label
      }
    }
    self
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(default)]
pub struct SortSettings {
  pub completion_status: bool,
  pub creation_date:     bool,
  pub pages:             bool,
  pub chats:             bool
}

impl Default for SortSettings {
  fn default() -> Self {
    Self {
      completion_status: false,
      creation_date:     true,
      pages:             false,
      chats:             false
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
)]
pub enum SortKey {
  CompletionStatus,
  CreationDate,
  Pages,
  Chats
}

impl SortKey {
  pub fn all() -> [Self; 4] {
    [
      Self::CompletionStatus,
      Self::CreationDate,
      Self::Pages,
      Self::Chats
    ]
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::CompletionStatus => {
        "Completion status"
      }
      | Self::CreationDate => {
        "Creation date"
      }
      | Self::Pages => "Pages",
      | Self::Chats => "Chats"
    }
  }
}

impl SortSettings {
  pub fn is_on(
    &self,
    key: SortKey
  ) -> bool {
    match key {
      | SortKey::CompletionStatus => {
        self.completion_status
      }
      | SortKey::CreationDate => {
        self.creation_date
      }
      | SortKey::Pages => self.pages,
      | SortKey::Chats => self.chats
    }
  }

  /// Copy with only `key` flipped.
  pub fn toggled(
    mut self,
    key: SortKey
  ) -> Self {
    match key {
      | SortKey::CompletionStatus => {
        self.completion_status =
          !self.completion_status
      }
      | SortKey::CreationDate => {
        self.creation_date =
          !self.creation_date
      }
      | SortKey::Pages => {
        self.pages = !self.pages
      }
      | SortKey::Chats => {
        self.chats = !self.chats
      }
    }
    self
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
pub enum DateFilter {
  #[default]
  #[serde(rename = "")]
  Any,
  #[serde(rename = "today")]
  Today,
  #[serde(rename = "this-week")]
  ThisWeek,
  #[serde(rename = "this-month")]
  ThisMonth,
  #[serde(rename = "overdue")]
  Overdue
}

impl DateFilter {
  pub fn all() -> [Self; 5] {
    [
      Self::Any,
      Self::Today,
      Self::ThisWeek,
      Self::ThisMonth,
      Self::Overdue
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Any => "",
      | Self::Today => "today",
      | Self::ThisWeek => "this-week",
      | Self::ThisMonth => {
        "this-month"
      }
      | Self::Overdue => "overdue"
    }
  }

  /// Unknown keys mean no date filter.
  pub fn from_key(key: &str) -> Self {
    match key.trim() {
      | "today" => Self::Today,
      | "this-week" => Self::ThisWeek,
      | "this-month" => {
        Self::ThisMonth
      }
      | "overdue" => Self::Overdue,
      | _ => Self::Any
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Any => "Any date",
      | Self::Today => "Today",
      | Self::ThisWeek => "This week",
      | Self::ThisMonth => {
        "This month"
      }
      | Self::Overdue => "Overdue"
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
  Low,
  Medium,
  High
}

impl Priority {
  pub fn all() -> [Self; 3] {
    [
      Self::Low,
      Self::Medium,
      Self::High
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Low => "low",
      | Self::Medium => "medium",
      | Self::High => "high"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Low => "Low",
      | Self::Medium => "Medium",
      | Self::High => "High"
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(default)]
pub struct FilterValues {
  #[serde(
    deserialize_with = "date_filter_lenient"
  )]
  pub date:       DateFilter,
  pub priorities: Vec<Priority>,
  pub labels:     Vec<String>
}

fn date_filter_lenient<'de, D>(
  deserializer: D
) -> Result<DateFilter, D::Error>
where
  D: serde::Deserializer<'de>
{
  let raw =
    String::deserialize(deserializer)?;
  Ok(DateFilter::from_key(&raw))
}

impl FilterValues {
  pub fn with_date(
    &self,
    date: DateFilter
  ) -> Self {
    Self {
      date,
      ..self.clone()
    }
  }

  /// Adds `priority` if missing,
  /// removes it otherwise.
  pub fn toggle_priority(
    &self,
    priority: Priority
  ) -> Self {
    let mut next = self.clone();
    if let Some(index) = next
      .priorities
      .iter()
      .position(|p| *p == priority)
    {
      next.priorities.remove(index);
    } else {
      next.priorities.push(priority);
      next.priorities.sort();
    }
    next
  }

  /// Trimmed; empty and duplicate
  /// labels are ignored.
  pub fn add_label(
    &self,
    label: &str
  ) -> Self {
    let label = label.trim();
    let mut next = self.clone();
    if !label.is_empty()
      && !next
        .labels
        .iter()
        .any(|existing| existing == label)
    {
      next
        .labels
        .push(label.to_string());
    }
    next
  }

  pub fn remove_label(
    &self,
    label: &str
  ) -> Self {
    let mut next = self.clone();
    next
      .labels
      .retain(|existing| existing != label);
    next
  }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error(
    "failed to parse header config: \
     {0}"
  )]
  Parse(#[from] toml::de::Error)
}

/// Initial header state read by the host
/// page. Every section is optional.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Default,
)]
#[serde(default)]
pub struct HeaderConfig {
  pub layout:        Layout,
  pub task_view:     TaskView,
  pub filters:       FilterSettings,
  pub sort:          SortSettings,
  pub filter_values: FilterValues
}

impl HeaderConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> Result<Self, ConfigError> {
    let config =
      toml::from_str::<Self>(raw)?;
    Ok(config)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_header_contract() {
    assert_eq!(
      FilterSettings::default(),
      FilterSettings {
        date:     false,
        priority: false,
        label:    false
      }
    );
    let sort = SortSettings::default();
    assert!(sort.creation_date);
    assert!(!sort.completion_status);
    assert!(!sort.pages);
    assert!(!sort.chats);
    let values = FilterValues::default();
    assert_eq!(
      values.date,
      DateFilter::Any
    );
    assert!(values.priorities.is_empty());
    assert!(values.labels.is_empty());
  }

  #[test]
  fn toggling_sort_flips_only_that_key()
  {
    let before = SortSettings::default();
    let after = before
      .toggled(SortKey::Pages);
    for key in SortKey::all() {
      if key == SortKey::Pages {
        assert_ne!(
          before.is_on(key),
          after.is_on(key)
        );
      } else {
        assert_eq!(
          before.is_on(key),
          after.is_on(key)
        );
      }
    }
  }

  #[test]
  fn toggling_filter_flips_only_that_key()
  {
    let after = FilterSettings::default()
      .toggled(FilterKey::Priority);
    assert!(after.priority);
    assert!(!after.date);
    assert!(!after.label);
    assert_eq!(
      after.toggled(FilterKey::Priority),
      FilterSettings::default()
    );
  }

  #[test]
  fn labels_are_trimmed_and_deduplicated()
  {
    let values = FilterValues::default()
      .add_label("  urgent ")
      .add_label("urgent")
      .add_label("   ")
      .add_label("home");
    assert_eq!(
      values.labels,
      vec![
        "urgent".to_string(),
        "home".to_string()
      ]
    );
    assert_eq!(
      values
        .remove_label("urgent")
        .labels,
      vec!["home".to_string()]
    );
  }

  #[test]
  fn priority_toggle_keeps_sorted_order()
  {
    let values = FilterValues::default()
      .toggle_priority(Priority::High)
      .toggle_priority(Priority::Low);
    assert_eq!(
      values.priorities,
      vec![
        Priority::Low,
        Priority::High
      ]
    );
    assert_eq!(
      values
        .toggle_priority(Priority::High)
        .priorities,
      vec![Priority::Low]
    );
  }

  #[test]
  fn unknown_date_key_means_any() {
    assert_eq!(
      DateFilter::from_key("yesterday"),
      DateFilter::Any
    );
    for date in DateFilter::all() {
      assert_eq!(
        DateFilter::from_key(
          date.as_key()
        ),
        date
      );
    }
  }

  #[test]
  fn partial_toml_falls_back_per_field() {
    let config =
      HeaderConfig::from_toml_str(
        r#"
layout = "board"

[sort]
pages = true

[filter_values]
date = "someday"
labels = ["work"]
"#
      )
      .expect("parse header config");

    assert_eq!(
      config.layout,
      Layout::Board
    );
    assert_eq!(
      config.task_view,
      TaskView::Total
    );
    assert!(config.sort.pages);
    assert!(config.sort.creation_date);
    assert_eq!(
      config.filters,
      FilterSettings::default()
    );
    assert_eq!(
      config.filter_values.date,
      DateFilter::Any
    );
    assert_eq!(
      config.filter_values.labels,
      vec!["work".to_string()]
    );
  }

  #[test]
  fn invalid_toml_is_a_parse_error() {
    let result =
      HeaderConfig::from_toml_str(
        "layout = \"grid\""
      );
    assert!(matches!(
      result,
      Err(ConfigError::Parse(_))
    ));
  }
}
