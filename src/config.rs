use std::path::PathBuf;

/// CSV read at startup, relative to the working directory.
pub const DATA_FILE: &str = "StudentsPerformance.csv";

/// Fixed settings for the dashboard window and its data source.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATA_FILE),
            title: "Student Performance Dashboard".to_string(),
            inner_size: [1400.0, 900.0],
            min_inner_size: [800.0, 500.0],
        }
    }
}
