use serde::{Deserialize, Deserializer, Serialize};

/// Employment arrangement selectable as a multi-value filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WorkMode {
    Onsite,
    Remote,
    Hybrid,
}

impl WorkMode {
    pub const ALL: [WorkMode; 3] = [WorkMode::Onsite, WorkMode::Remote, WorkMode::Hybrid];

    /// Key used both on the wire (`work_mode=`) and in navigation payloads.
    pub fn key(self) -> &'static str {
        match self {
            WorkMode::Onsite => "onsite",
            WorkMode::Remote => "remote",
            WorkMode::Hybrid => "hybrid",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.key().eq_ignore_ascii_case(key.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkPreferences {
    #[serde(deserialize_with = "null_as_default")]
    pub onsite: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub remote: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub hybrid: bool,
}

impl WorkPreferences {
    pub fn get(&self, mode: WorkMode) -> bool {
        match mode {
            WorkMode::Onsite => self.onsite,
            WorkMode::Remote => self.remote,
            WorkMode::Hybrid => self.hybrid,
        }
    }

    pub fn set(&mut self, mode: WorkMode, selected: bool) {
        match mode {
            WorkMode::Onsite => self.onsite = selected,
            WorkMode::Remote => self.remote = selected,
            WorkMode::Hybrid => self.hybrid = selected,
        }
    }

    /// Selected modes in canonical order (onsite, remote, hybrid).
    pub fn selected(&self) -> Vec<WorkMode> {
        WorkMode::ALL
            .into_iter()
            .filter(|mode| self.get(*mode))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        !(self.onsite || self.remote || self.hybrid)
    }
}

/// Recency filter for postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "3hours")]
    ThreeHours,
    #[serde(rename = "8hours")]
    EightHours,
}

impl DateFilter {
    pub fn as_param(self) -> &'static str {
        match self {
            DateFilter::All => "all",
            DateFilter::Today => "today",
            DateFilter::ThreeHours => "3hours",
            DateFilter::EightHours => "8hours",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim() {
            "all" => Some(DateFilter::All),
            "today" => Some(DateFilter::Today),
            "3hours" => Some(DateFilter::ThreeHours),
            "8hours" => Some(DateFilter::EightHours),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateFilter::All => "All",
            DateFilter::Today => "Posted today",
            DateFilter::ThreeHours => "Last 3 hours",
            DateFilter::EightHours => "Last 8 hours",
        }
    }
}

/// One snapshot of search criteria.
///
/// Serialised with the camelCase names used by navigation payloads; missing
/// and `null` fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSet {
    #[serde(deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub work_preferences: WorkPreferences,
    #[serde(deserialize_with = "null_as_default")]
    pub date_filter: DateFilter,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub district: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl FilterSet {
    /// True when every field is empty or at its default.
    pub fn is_empty(&self) -> bool {
        self == &FilterSet::default()
    }

    /// Removable filters currently set, in display order.
    pub fn tags(&self) -> Vec<FilterKey> {
        let mut tags = Vec::new();
        let scalars = [
            (FilterKey::Query, &self.query),
            (FilterKey::Location, &self.location),
            (FilterKey::Country, &self.country),
            (FilterKey::City, &self.city),
            (FilterKey::District, &self.district),
        ];
        for (key, value) in scalars {
            if !value.is_empty() {
                tags.push(key);
            }
        }
        tags.extend(
            self.work_preferences
                .selected()
                .into_iter()
                .map(FilterKey::WorkPreference),
        );
        if self.date_filter != DateFilter::All {
            tags.push(FilterKey::DateFilter);
        }
        tags
    }
}

/// A single pending-field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterField {
    Query(String),
    Location(String),
    WorkPreference(WorkMode, bool),
    DateFilter(DateFilter),
    Country(String),
    City(String),
    District(String),
}

/// Identifies one removable filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Query,
    Location,
    WorkPreference(WorkMode),
    DateFilter,
    Country,
    City,
    District,
}
