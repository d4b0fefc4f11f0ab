pub mod balance;
pub mod source;

pub use balance::Balance;
pub use source::{CreatePower, Power, Source, SourceFilters, SourceSummary};
