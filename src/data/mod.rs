/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///    .csv / .json
///         │
///         ▼
///    ┌──────────┐
///    │  loader   │  parse file → RiverDataset
///    └──────────┘
///         │
///         ▼
///    ┌──────────────┐
///    │ RiverDataset  │  Vec<Sample>, immutable for the run
///    └──────────────┘
///         │
///         ▼
///    ┌──────────┐
///    │ analysis  │  summary statistics + regression fit
///    └──────────┘
/// ```

pub mod loader;
pub mod model;
