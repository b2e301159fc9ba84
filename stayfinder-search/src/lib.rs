pub mod criteria;
pub mod pipeline;
pub mod suggest;

pub use criteria::{CriteriaError, FilterState, SearchCriteria, SortKey};
pub use pipeline::{filter, paginate, search, sort, Page};
pub use suggest::suggest_destinations;
