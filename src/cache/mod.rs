//! Display caching for the friend grid.

pub mod row_cache;

pub use row_cache::RowDisplayCache;
