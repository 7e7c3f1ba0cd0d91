use std::fmt;

// ---------------------------------------------------------------------------
// Column – the named columns of the student table
// ---------------------------------------------------------------------------

/// Columns of the student table, in display order.
///
/// The first eight come from the CSV header (matched after trimming); the last
/// one is derived at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Gender,
    RaceEthnicity,
    ParentalEducation,
    Lunch,
    TestPreparation,
    MathScore,
    ReadingScore,
    WritingScore,
    AverageSubjects,
}

impl Column {
    /// Columns that must be present in the source header.
    pub const SOURCE: [Column; 8] = [
        Column::Gender,
        Column::RaceEthnicity,
        Column::ParentalEducation,
        Column::Lunch,
        Column::TestPreparation,
        Column::MathScore,
        Column::ReadingScore,
        Column::WritingScore,
    ];

    /// Columns shown in the sorted detail table.
    pub const TABLE: [Column; 9] = [
        Column::Gender,
        Column::RaceEthnicity,
        Column::ParentalEducation,
        Column::Lunch,
        Column::TestPreparation,
        Column::MathScore,
        Column::ReadingScore,
        Column::WritingScore,
        Column::AverageSubjects,
    ];

    /// Header name exactly as it appears in the CSV.
    pub fn header(self) -> &'static str {
        match self {
            Column::Gender => "gender",
            Column::RaceEthnicity => "race/ethnicity",
            Column::ParentalEducation => "parental level of education",
            Column::Lunch => "lunch",
            Column::TestPreparation => "test preparation course",
            Column::MathScore => "math score",
            Column::ReadingScore => "reading score",
            Column::WritingScore => "writing score",
            Column::AverageSubjects => "average_subjects",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

// ---------------------------------------------------------------------------
// Category – the categorical columns a view can be grouped by
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Gender,
    RaceEthnicity,
    ParentalEducation,
}

impl Category {
    /// The record's value for this category.
    pub fn value_of(self, record: &StudentRecord) -> &str {
        let p = &record.profile;
        match self {
            Category::Gender => &p.gender,
            Category::RaceEthnicity => &p.race_ethnicity,
            Category::ParentalEducation => &p.parental_level_of_education,
        }
    }
}

// ---------------------------------------------------------------------------
// StudentRecord – one row of the source table
// ---------------------------------------------------------------------------

/// Categorical attributes of a student, kept verbatim from the source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub gender: String,
    pub race_ethnicity: String,
    pub parental_level_of_education: String,
    pub lunch: String,
    pub test_preparation_course: String,
}

/// The three exam scores.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scores {
    pub math: f64,
    pub reading: f64,
    pub writing: f64,
}

impl Scores {
    /// Unweighted mean of the three scores. No rounding.
    pub fn mean(&self) -> f64 {
        (self.math + self.reading + self.writing) / 3.0
    }
}

/// A single student (one row of the CSV) plus the derived average.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub profile: Profile,
    pub scores: Scores,
    average_subjects: f64,
}

impl StudentRecord {
    /// Build a record, deriving `average_subjects` once.
    pub fn new(profile: Profile, scores: Scores) -> Self {
        let average_subjects = scores.mean();
        Self {
            profile,
            scores,
            average_subjects,
        }
    }

    pub fn average_subjects(&self) -> f64 {
        self.average_subjects
    }

    /// Numeric value of a score column; `None` for categorical columns.
    pub fn number(&self, column: Column) -> Option<f64> {
        match column {
            Column::MathScore => Some(self.scores.math),
            Column::ReadingScore => Some(self.scores.reading),
            Column::WritingScore => Some(self.scores.writing),
            Column::AverageSubjects => Some(self.average_subjects),
            _ => None,
        }
    }

    /// Text of a categorical column; `None` for numeric columns.
    pub fn text(&self, column: Column) -> Option<&str> {
        let p = &self.profile;
        match column {
            Column::Gender => Some(&p.gender),
            Column::RaceEthnicity => Some(&p.race_ethnicity),
            Column::ParentalEducation => Some(&p.parental_level_of_education),
            Column::Lunch => Some(&p.lunch),
            Column::TestPreparation => Some(&p.test_preparation_course),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All student records in file order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    records: Vec<StudentRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn record(gender: &str, math: f64, reading: f64, writing: f64) -> StudentRecord {
    StudentRecord::new(
        Profile {
            gender: gender.to_string(),
            race_ethnicity: "group A".to_string(),
            parental_level_of_education: "high school".to_string(),
            lunch: "standard".to_string(),
            test_preparation_course: "none".to_string(),
        },
        Scores {
            math,
            reading,
            writing,
        },
    )
}
