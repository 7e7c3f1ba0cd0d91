use crate::data::aggregate::{aggregate, GroupMean};
use crate::data::error::DataError;
use crate::data::filter::{FilteredView, GenderFilter};
use crate::data::model::{Column, StudentRecord};

// ---------------------------------------------------------------------------
// View model handed to the UI
// ---------------------------------------------------------------------------

/// A labelled, pre-formatted scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

impl Metric {
    fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value: format_fixed(value),
        }
    }
}

/// What the gender panel shows for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum GenderPanel {
    /// Per-gender means (only for `General`).
    Breakdown(Vec<GroupMean>),
    /// A single gender was selected; show its overall average instead.
    Single { filter: GenderFilter, metric: Metric },
}

/// One display row of the ranked table, in [`Column::TABLE`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: [String; 9],
    /// Unformatted average, kept for anything that needs the real value.
    pub average_subjects: f64,
}

impl TableRow {
    fn from_record(record: &StudentRecord) -> Self {
        let cells = Column::TABLE.map(|col| match (record.text(col), record.number(col)) {
            (Some(text), _) => text.to_string(),
            (None, Some(v)) if col == Column::AverageSubjects => format_fixed(v),
            (None, Some(v)) => format_score(v),
            (None, None) => String::new(),
        });
        Self {
            cells,
            average_subjects: record.average_subjects(),
        }
    }
}

/// Everything the dashboard renders for one filter selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub filter: GenderFilter,
    pub row_count: usize,
    /// Math, reading, writing, overall.
    pub metrics: [Metric; 4],
    pub gender: GenderPanel,
    pub by_parental_education: Vec<GroupMean>,
    pub by_race_ethnicity: Vec<GroupMean>,
    pub table: Vec<TableRow>,
}

impl DashboardView {
    /// Aggregate `view` and format it for display.
    pub fn build(view: &FilteredView<'_>) -> Result<Self, DataError> {
        let result = aggregate(view)?;
        let s = result.summary;
        let filter = view.filter();

        let gender = match result.by_gender {
            Some(groups) => GenderPanel::Breakdown(groups),
            None => GenderPanel::Single {
                filter,
                metric: Metric::new(format!("Average for {filter}"), s.average),
            },
        };

        Ok(Self {
            filter,
            row_count: view.len(),
            metrics: [
                Metric::new("Math average", s.math),
                Metric::new("Reading average", s.reading),
                Metric::new("Writing average", s.writing),
                Metric::new("Overall average", s.average),
            ],
            gender,
            by_parental_education: result.by_parental_education,
            by_race_ethnicity: result.by_race_ethnicity,
            table: result.ranked.into_iter().map(TableRow::from_record).collect(),
        })
    }
}

/// Two-decimal fixed point.
pub fn format_fixed(v: f64) -> String {
    format!("{v:.2}")
}

/// Whole scores print without decimals, anything else as-is.
pub fn format_score(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{record, Dataset};

    fn two_students() -> Dataset {
        Dataset::from_records(vec![
            record("female", 70.0, 80.0, 75.0),
            record("male", 90.0, 85.0, 95.0),
        ])
    }

    #[test]
    fn general_selection_gets_breakdown() {
        let ds = two_students();
        let view = DashboardView::build(&GenderFilter::General.apply(&ds)).unwrap();
        match &view.gender {
            GenderPanel::Breakdown(groups) => assert_eq!(groups.len(), 2),
            other => panic!("expected breakdown, got {other:?}"),
        }
        assert_eq!(view.metrics[3].value, "82.50");
        assert_eq!(view.row_count, 2);
    }

    #[test]
    fn single_gender_gets_metric() {
        let ds = two_students();
        let view = DashboardView::build(&GenderFilter::Male.apply(&ds)).unwrap();
        assert_eq!(
            view.gender,
            GenderPanel::Single {
                filter: GenderFilter::Male,
                metric: Metric {
                    label: "Average for Male".into(),
                    value: "90.00".into(),
                },
            }
        );
    }

    #[test]
    fn table_is_ranked_and_formatted() {
        let ds = Dataset::from_records(vec![
            record("female", 70.0, 80.0, 76.0),
            record("male", 90.0, 85.0, 95.0),
        ]);
        let view = DashboardView::build(&GenderFilter::General.apply(&ds)).unwrap();
        assert_eq!(view.table[0].cells[0], "male");
        assert_eq!(view.table[0].cells[8], "90.00");
        assert_eq!(view.table[1].cells[5], "70");
        assert_eq!(view.table[1].cells[8], "75.33");
        assert!((view.table[1].average_subjects - 226.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_selection_has_no_view() {
        let ds = Dataset::from_records(vec![record("female", 1.0, 1.0, 1.0)]);
        let err = DashboardView::build(&GenderFilter::Male.apply(&ds)).unwrap_err();
        assert!(matches!(err, DataError::EmptyView { .. }));
    }

    #[test]
    fn score_formatting() {
        assert_eq!(format_score(72.0), "72");
        assert_eq!(format_score(72.5), "72.5");
        assert_eq!(format_fixed(2.0 / 3.0), "0.67");
    }
}
