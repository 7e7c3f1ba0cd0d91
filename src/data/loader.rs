use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::error::DataError;
use super::model::{Column, Dataset, Profile, Scores, StudentRecord};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the student table from a comma-separated file with a header row.
///
/// Header names are trimmed before matching. All eight source columns must be
/// present, otherwise nothing is loaded. Extra columns are ignored.
pub fn load_file(path: &Path) -> Result<Dataset, DataError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DataError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => DataError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let dataset = read_csv(file).map_err(|e| match e {
        DataError::Csv { source, .. } => DataError::Csv {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    log::info!("Loaded {} students from {}", dataset.len(), path.display());
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// Parse CSV text from any reader. Errors carry an empty path; [`load_file`]
/// fills it in.
pub fn read_csv<R: Read>(source: R) -> Result<Dataset, DataError> {
    let csv_err = |source: csv::Error| DataError::Csv {
        path: Default::default(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers = reader.headers().map_err(csv_err)?.clone();
    let index = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.map_err(csv_err)?;
        records.push(index.parse_row(&row, row_no)?);
    }

    Ok(Dataset::from_records(records))
}

// -- header resolution --

/// Position of each source column in the CSV header, indexed by `Column`
/// discriminant (`Column::SOURCE` is in declaration order).
struct ColumnIndex {
    positions: [usize; 8],
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, DataError> {
        let mut positions = [0usize; 8];
        for (slot, column) in positions.iter_mut().zip(Column::SOURCE) {
            *slot = headers
                .iter()
                .position(|h| h.trim() == column.header())
                .ok_or(DataError::MissingColumn {
                    column: column.header(),
                })?;
        }
        Ok(Self { positions })
    }

    /// Raw text of a source column; empty when the row is short.
    fn cell<'r>(&self, row: &'r csv::StringRecord, column: Column) -> &'r str {
        self.positions
            .get(column as usize)
            .and_then(|&i| row.get(i))
            .unwrap_or("")
    }

    fn score(&self, row: &csv::StringRecord, column: Column, row_no: usize) -> Result<f64, DataError> {
        let raw = self.cell(row, column);
        // `f64::from_str` accepts "NaN" and "inf"; scores must be finite.
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| DataError::InvalidScore {
                row: row_no,
                column: column.header(),
                value: raw.to_string(),
            })
    }

    fn parse_row(&self, row: &csv::StringRecord, row_no: usize) -> Result<StudentRecord, DataError> {
        let text = |column| self.cell(row, column).to_string();
        let profile = Profile {
            gender: text(Column::Gender),
            race_ethnicity: text(Column::RaceEthnicity),
            parental_level_of_education: text(Column::ParentalEducation),
            lunch: text(Column::Lunch),
            test_preparation_course: text(Column::TestPreparation),
        };
        let scores = Scores {
            math: self.score(row, Column::MathScore, row_no)?,
            reading: self.score(row, Column::ReadingScore, row_no)?,
            writing: self.score(row, Column::WritingScore, row_no)?,
        };
        Ok(StudentRecord::new(profile, scores))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "gender,race/ethnicity,parental level of education,lunch,test preparation course,math score,reading score,writing score";

    #[test]
    fn reads_rows_and_derives_average() {
        let text = format!(
            "{HEADER}\nfemale,group B,bachelor's degree,standard,none,70,80,75\nmale,group C,some college,free/reduced,completed,90,85,95\n"
        );
        let ds = read_csv(text.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        let r0 = &ds.records()[0];
        assert_eq!(r0.profile.gender, "female");
        assert_eq!(r0.profile.parental_level_of_education, "bachelor's degree");
        assert_eq!(r0.average_subjects(), 75.0);
        assert_eq!(ds.records()[1].average_subjects(), 90.0);
    }

    #[test]
    fn header_whitespace_is_trimmed() {
        let text = " gender , race/ethnicity,parental level of education ,lunch,test preparation course,math score , reading score,writing score\nmale,group A,high school,standard,none,60,60,63\n";
        let ds = read_csv(text.as_bytes()).unwrap();
        assert_eq!(ds.records()[0].profile.gender, "male");
        assert_eq!(ds.records()[0].average_subjects(), 61.0);
    }

    #[test]
    fn values_keep_their_case() {
        let text = format!("{HEADER}\nFemale,group A,high school,standard,none,1,2,3\n");
        let ds = read_csv(text.as_bytes()).unwrap();
        assert_eq!(ds.records()[0].profile.gender, "Female");
    }

    #[test]
    fn extra_columns_and_reordering_are_accepted() {
        let text = "id,writing score,reading score,math score,test preparation course,lunch,parental level of education,race/ethnicity,gender\n7,30,20,10,none,standard,high school,group D,male\n";
        let ds = read_csv(text.as_bytes()).unwrap();
        let r = &ds.records()[0];
        assert_eq!(r.scores.math, 10.0);
        assert_eq!(r.scores.writing, 30.0);
        assert_eq!(r.profile.race_ethnicity, "group D");
    }

    #[test]
    fn missing_column_fails_the_whole_load() {
        let text = "gender,race/ethnicity,parental level of education,lunch,math score,reading score,writing score\nfemale,group A,high school,standard,1,2,3\n";
        let err = read_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DataError::MissingColumn {
                column: "test preparation course"
            }
        ));
    }

    #[test]
    fn non_numeric_score_is_rejected() {
        let text = format!("{HEADER}\nfemale,group A,high school,standard,none,abc,2,3\n");
        let err = read_csv(text.as_bytes()).unwrap_err();
        match err {
            DataError::InvalidScore { row, column, value } => {
                assert_eq!(row, 0);
                assert_eq!(column, "math score");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_scores_are_rejected() {
        for bad in ["NaN", "nan", "inf", "-inf"] {
            let text = format!(
                "{HEADER}\nfemale,group A,high school,standard,none,50,50,50\nmale,group B,high school,standard,none,{bad},60,60\n"
            );
            match read_csv(text.as_bytes()).unwrap_err() {
                DataError::InvalidScore { row, column, value } => {
                    assert_eq!(row, 1);
                    assert_eq!(column, "math score");
                    assert_eq!(value, bad);
                }
                other => panic!("unexpected error for {bad}: {other}"),
            }
        }
    }

    #[test]
    fn empty_score_is_rejected() {
        let text = format!("{HEADER}\nfemale,group A,high school,standard,none,,2,3\n");
        assert!(matches!(
            read_csv(text.as_bytes()).unwrap_err(),
            DataError::InvalidScore { column: "math score", .. }
        ));
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("StudentsPerformance.csv");
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DataError::FileNotFound { path: p } if p == path));
    }

    #[test]
    fn header_only_file_gives_empty_dataset() {
        let ds = read_csv(format!("{HEADER}\n").as_bytes()).unwrap();
        assert!(ds.is_empty());
    }
}
