use std::collections::HashMap;

use super::error::DataError;
use super::filter::FilteredView;
use super::model::{Category, Column, StudentRecord};

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Scalar means over a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub math: f64,
    pub reading: f64,
    pub writing: f64,
    pub average: f64,
}

/// Mean of `average_subjects` for one category value.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean {
    pub category: String,
    pub mean: f64,
    pub count: usize,
}

/// Everything the dashboard needs from one filter selection.
#[derive(Debug, Clone)]
pub struct AggregateResult<'a> {
    pub summary: Summary,
    /// Only computed for the `General` selection; any other selection holds
    /// a single gender by construction.
    pub by_gender: Option<Vec<GroupMean>>,
    /// Ascending by mean.
    pub by_parental_education: Vec<GroupMean>,
    /// First-encountered order.
    pub by_race_ethnicity: Vec<GroupMean>,
    /// View rows, descending by `average_subjects`, ties in view order.
    pub ranked: Vec<&'a StudentRecord>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Compute every aggregate for `view`. Fails with `EmptyView` when nothing
/// passed the filter.
pub fn aggregate<'a>(view: &FilteredView<'a>) -> Result<AggregateResult<'a>, DataError> {
    let summary = summarize(view)?;

    let by_gender = view
        .filter()
        .is_general()
        .then(|| group_mean(view, Category::Gender));

    let mut by_parental_education = group_mean(view, Category::ParentalEducation);
    by_parental_education.sort_by(|a, b| a.mean.total_cmp(&b.mean));

    Ok(AggregateResult {
        summary,
        by_gender,
        by_parental_education,
        by_race_ethnicity: group_mean(view, Category::RaceEthnicity),
        ranked: rank_by_average(view),
    })
}

/// Means of the three scores and the derived average.
pub fn summarize(view: &FilteredView<'_>) -> Result<Summary, DataError> {
    if view.is_empty() {
        log::warn!("No rows for filter '{}'", view.filter());
        return Err(DataError::EmptyView {
            filter: view.filter(),
        });
    }
    Ok(Summary {
        math: column_mean(view, Column::MathScore),
        reading: column_mean(view, Column::ReadingScore),
        writing: column_mean(view, Column::WritingScore),
        average: column_mean(view, Column::AverageSubjects),
    })
}

fn column_mean(view: &FilteredView<'_>, column: Column) -> f64 {
    let sum: f64 = view.iter().filter_map(|r| r.number(column)).sum();
    sum / view.len() as f64
}

/// Group the view by a categorical column and average `average_subjects`
/// per group. Keys appear in first-encountered order; only values present in
/// the view become keys.
pub fn group_mean(view: &FilteredView<'_>, category: Category) -> Vec<GroupMean> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut acc: Vec<(&str, f64, usize)> = Vec::new();

    for record in view.iter() {
        let key = category.value_of(record);
        let slot = *slots.entry(key).or_insert_with(|| {
            acc.push((key, 0.0, 0));
            acc.len() - 1
        });
        let (_, sum, count) = &mut acc[slot];
        *sum += record.average_subjects();
        *count += 1;
    }

    acc.into_iter()
        .map(|(key, sum, count)| GroupMean {
            category: key.to_string(),
            mean: sum / count as f64,
            count,
        })
        .collect()
}

/// Stable descending sort by `average_subjects`.
pub fn rank_by_average<'a>(view: &FilteredView<'a>) -> Vec<&'a StudentRecord> {
    let mut rows: Vec<&StudentRecord> = view.iter().collect();
    rows.sort_by(|a, b| b.average_subjects().total_cmp(&a.average_subjects()));
    rows
}
