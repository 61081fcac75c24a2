pub mod context;
pub mod init;
pub mod inspect;
pub mod transform;

pub use inspect::{InspectSummary, InspectedFile};
