use crate::{DateFilter, FilterField, FilterKey, FilterSet, LocationCatalog};

/// Draft/committed pair of search criteria plus the page cursor they drive.
///
/// `active` only changes through [`FilterStore::commit`], [`FilterStore::remove_filter`],
/// [`FilterStore::clear_all`] and [`FilterStore::seed`]. Every one of those resets the
/// page to 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterStore {
    pending: FilterSet,
    active: FilterSet,
    page: u32,
    unfiltered: bool,
    catalog: LocationCatalog,
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new(LocationCatalog::default())
    }
}

impl FilterStore {
    pub fn new(catalog: LocationCatalog) -> Self {
        Self {
            pending: FilterSet::default(),
            active: FilterSet::default(),
            page: 1,
            unfiltered: false,
            catalog,
        }
    }

    pub fn pending(&self) -> &FilterSet {
        &self.pending
    }

    pub fn active(&self) -> &FilterSet {
        &self.active
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    /// True when the store was seeded without any criteria and nothing has
    /// been committed since.
    pub fn is_unfiltered(&self) -> bool {
        self.unfiltered
    }

    /// Page moves never touch the filters.
    pub(crate) fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_pending(&mut self, field: FilterField) {
        match field {
            FilterField::Query(value) => self.pending.query = value,
            FilterField::Location(value) => self.pending.location = value,
            FilterField::WorkPreference(mode, selected) => {
                self.pending.work_preferences.set(mode, selected)
            }
            FilterField::DateFilter(value) => self.pending.date_filter = value,
            FilterField::Country(value) => self.pending.country = value,
            FilterField::City(value) => set_city(&mut self.pending, value, &self.catalog),
            FilterField::District(value) => self.pending.district = value,
        }
    }

    pub fn commit(&mut self) {
        self.active = self.pending.clone();
        self.page = 1;
        self.unfiltered = false;
    }

    /// Clears one active value, mirrors the clear into pending and resets the page.
    pub fn remove_filter(&mut self, key: FilterKey) {
        clear_field(&mut self.active, key, &self.catalog);
        clear_field(&mut self.pending, key, &self.catalog);
        self.page = 1;
    }

    pub fn clear_all(&mut self) {
        self.pending = FilterSet::default();
        self.active = FilterSet::default();
        self.page = 1;
    }

    /// Seeds both snapshots from a navigation payload.
    ///
    /// Returns `true` when the seeded criteria warrant an initial fetch.
    pub fn seed(&mut self, initial: Option<FilterSet>) -> bool {
        let mut initial = initial.unwrap_or_default();
        if !initial.district.is_empty()
            && !self
                .catalog
                .districts(&initial.city)
                .contains(&initial.district)
        {
            initial.district.clear();
        }
        self.unfiltered = initial.is_empty();
        self.pending = initial.clone();
        self.active = initial;
        self.page = 1;
        !self.unfiltered
    }
}

fn set_city(filters: &mut FilterSet, city: String, catalog: &LocationCatalog) {
    if !catalog.districts(&city).contains(&filters.district) {
        filters.district.clear();
    }
    filters.city = city;
}

fn clear_field(filters: &mut FilterSet, key: FilterKey, catalog: &LocationCatalog) {
    match key {
        FilterKey::Query => filters.query.clear(),
        FilterKey::Location => filters.location.clear(),
        FilterKey::WorkPreference(mode) => filters.work_preferences.set(mode, false),
        FilterKey::DateFilter => filters.date_filter = DateFilter::All,
        FilterKey::Country => filters.country.clear(),
        FilterKey::City => set_city(filters, String::new(), catalog),
        FilterKey::District => filters.district.clear(),
    }
}
