/// Data layer: category tables, loading, and period alignment.
///
/// Architecture:
/// ```text
///  81901NED (age)      81920NED (sector)
///        │                    │
///        ▼                    ▼
///   ┌──────────┐        ┌──────────┐
///   │  loader  │        │  loader  │   rename + drop unlisted codes
///   └──────────┘        └──────────┘
///        │                    │
///        └────────┬───────────┘
///                 ▼
///           ┌──────────┐
///           │  align   │   period → year, shared year range
///           └──────────┘
///                 │
///                 ▼
///           AlignedTables
/// ```

pub mod align;
pub mod loader;
pub mod model;
