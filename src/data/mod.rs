/// Data layer: feed types, loading, and selection.
///
/// Architecture:
/// ```text
///   HTTP GET (JSON array)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch on a worker thread → Vec<Observation>
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ Observation[] │  immutable, replaced wholesale
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  select   │  indicator → ordered series + min/max/mean
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod select;
