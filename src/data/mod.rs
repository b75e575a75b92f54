/// Data layer: core types, loading, filtering and export.
///
/// Architecture:
/// ```text
///   HR attrition .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + schema check → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Employee>, source records, category order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterCriteria → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  raw / filtered view → CSV text
///   └──────────┘
/// ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
