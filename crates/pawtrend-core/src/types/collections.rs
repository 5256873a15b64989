//! Fast hash collections used on hot counting paths.

pub use rustc_hash::FxHashMap;
