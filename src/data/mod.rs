//! Data layer: core types, loading, filtering and aggregation.
//!
//! Architecture:
//! ```text
//!  StudentsPerformance.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Dataset (+ average_subjects)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  cache    │  path → Arc<Dataset>, loaded once
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  GenderFilter → FilteredView (row indices)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ aggregate  │  means, group-by means, ranked rows
//!   └───────────┘
//! ```

pub mod aggregate;
pub mod cache;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
