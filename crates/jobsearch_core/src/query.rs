use crate::{DateFilter, FilterSet, UserId, PAGE_SIZE};

/// Ordered query parameters for `GET /jobs/`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    params: Vec<(&'static str, String)>,
}

impl SearchQuery {
    /// Builds the results-page query from the active filters.
    pub fn build(filters: &FilterSet, page: u32, user_id: Option<UserId>) -> Self {
        let mut query = Self::default();
        query.push("query", filters.query.clone());
        query.push("location", filters.location.clone());
        query.push("page", page.max(1).to_string());
        query.push("limit", PAGE_SIZE.to_string());

        let modes = filters.work_preferences.selected();
        if !modes.is_empty() {
            let joined = modes
                .iter()
                .map(|mode| mode.key())
                .collect::<Vec<_>>()
                .join(",");
            query.push("work_mode", joined);
        }
        if filters.date_filter != DateFilter::All {
            query.push("date_filter", filters.date_filter.as_param().to_string());
        }
        query.push_non_empty("country", &filters.country);
        query.push_non_empty("city", &filters.city);
        query.push_non_empty("district", &filters.district);
        if let Some(user_id) = user_id {
            query.push("user_id", user_id.to_string());
        }
        query
    }

    /// Home-page featured listing: optional city and a small limit, nothing else.
    pub fn featured(city: Option<&str>, limit: u32) -> Self {
        let mut query = Self::default();
        if let Some(city) = city {
            query.push_non_empty("city", city);
        }
        query.push("limit", limit.to_string());
        query
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }

    fn push(&mut self, key: &'static str, value: String) {
        self.params.push((key, value));
    }

    fn push_non_empty(&mut self, key: &'static str, value: &str) {
        if !value.is_empty() {
            self.push(key, value.to_string());
        }
    }
}
