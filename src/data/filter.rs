use std::fmt;

use super::model::{Dataset, StudentRecord};

// ---------------------------------------------------------------------------
// GenderFilter – the one user-facing selection
// ---------------------------------------------------------------------------

/// Closed set of filter options. `General` keeps every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenderFilter {
    #[default]
    General,
    Female,
    Male,
}

impl GenderFilter {
    /// All options in the order they are offered.
    pub const ALL: [GenderFilter; 3] = [GenderFilter::General, GenderFilter::Female, GenderFilter::Male];

    pub fn label(self) -> &'static str {
        match self {
            GenderFilter::General => "General",
            GenderFilter::Female => "Female",
            GenderFilter::Male => "Male",
        }
    }

    /// Literal `gender` value this option matches, as stored in the CSV.
    pub fn gender_value(self) -> Option<&'static str> {
        match self {
            GenderFilter::General => None,
            GenderFilter::Female => Some("female"),
            GenderFilter::Male => Some("male"),
        }
    }

    pub fn is_general(self) -> bool {
        self == GenderFilter::General
    }

    /// Row predicate. Exact, case-sensitive match on `gender`.
    pub fn matches(self, record: &StudentRecord) -> bool {
        match self.gender_value() {
            None => true,
            Some(g) => record.profile.gender == g,
        }
    }

    /// Apply the predicate, producing a new view. The dataset is untouched.
    pub fn apply(self, dataset: &Dataset) -> FilteredView<'_> {
        let indices = dataset
            .records()
            .iter()
            .enumerate()
            .filter(|(_, r)| self.matches(r))
            .map(|(i, _)| i)
            .collect();
        FilteredView {
            dataset,
            filter: self,
            indices,
        }
    }
}

impl fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// FilteredView – rows passing the current filter
// ---------------------------------------------------------------------------

/// Rows of a dataset selected by a [`GenderFilter`], in dataset order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    filter: GenderFilter,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub fn filter(&self) -> GenderFilter {
        self.filter
    }

    /// Positions of the selected rows in the dataset.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a StudentRecord> + '_ {
        let records = self.dataset.records();
        self.indices.iter().map(move |&i| &records[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            record("female", 70.0, 80.0, 75.0),
            record("male", 90.0, 85.0, 95.0),
            record("female", 40.0, 50.0, 60.0),
            record("male", 10.0, 20.0, 30.0),
        ])
    }

    #[test]
    fn default_is_general() {
        assert_eq!(GenderFilter::default(), GenderFilter::General);
        assert_eq!(GenderFilter::ALL[0], GenderFilter::General);
    }

    #[test]
    fn general_keeps_all_rows_in_order() {
        let ds = sample();
        let view = GenderFilter::General.apply(&ds);
        assert_eq!(view.indices(), &[0, 1, 2, 3]);
        let rows: Vec<_> = view.iter().cloned().collect();
        assert_eq!(rows, ds.records());
    }

    #[test]
    fn female_and_male_partition_the_dataset() {
        let ds = sample();
        let female = GenderFilter::Female.apply(&ds);
        let male = GenderFilter::Male.apply(&ds);
        assert!(female.iter().all(|r| r.profile.gender == "female"));
        assert!(male.iter().all(|r| r.profile.gender == "male"));

        let mut all: Vec<usize> = female.indices().iter().chain(male.indices()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3]);
    }

    #[test]
    fn match_is_case_sensitive() {
        let ds = Dataset::from_records(vec![record("Female", 1.0, 1.0, 1.0)]);
        assert!(GenderFilter::Female.apply(&ds).is_empty());
    }

    #[test]
    fn filtering_carries_average_unchanged() {
        let ds = sample();
        let view = GenderFilter::Male.apply(&ds);
        let avgs: Vec<f64> = view.iter().map(|r| r.average_subjects()).collect();
        assert_eq!(avgs, vec![90.0, 20.0]);
        assert_eq!(ds.len(), 4);
    }
}
