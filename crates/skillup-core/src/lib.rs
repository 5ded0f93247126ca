pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use catalog::{Catalog, CatalogIssue};
pub use config::{MatchMode, SkillUpConfig};
pub use error::{Result, SkillUpError};
pub use types::*;
