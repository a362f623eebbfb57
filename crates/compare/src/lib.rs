// Comparison core: reconcile two workbooks into an ordered difference list,
// cache both workbooks under a comparison id, and serve paginated row
// windows from the cache.

pub mod diff;
pub mod error;
pub mod paginate;
pub mod service;
pub mod store;

pub use diff::compare;
pub use error::CompareError;
pub use paginate::{paginate, SheetPages};
pub use service::{create_comparison, paginate_comparison, PREVIEW_ROWS};
pub use store::{CachedComparison, ComparisonStore};
