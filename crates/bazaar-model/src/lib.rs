pub mod collate;
pub mod error;
pub mod params;
pub mod record;
pub mod resource;
pub mod sort;

pub use error::ModelError;
pub use params::ListParams;
pub use record::{Record, RecordId};
pub use resource::Resource;
pub use sort::{ColumnKind, SortOrder, SortState, sort_records};
