//! Cross-filter state: region selection, date predicate, propagation hub
pub mod date;
pub mod hub;
pub mod region;


pub use hub::{FilterEvent, FilterHub, FilteredView};
pub use region::GEODEMOGRAPHIC_EXCLUSIONS;
// Public API exports - allow unused imports as these are part of the public API
#[allow(unused_imports)]
pub use date::open_at;
#[allow(unused_imports)]
pub use region::RegionSelection;
