//! LINQ-style query operators for slices and vectors.
//!
//! ```
//! use linq_utils::prelude::*;
//!
//! let names = vec!["apple", "bananna", "carrot"];
//! let groups = names.group_by(|n| n.len());
//! assert_eq!(groups.len(), 3);
//! assert_eq!(names.where_by(|n| n.contains('a')).len(), 3);
//! ```

pub mod error;
pub mod group;
pub mod query;

pub use error::{QueryError, Result};
pub use group::{GroupByKey, KeyGroup};
pub use query::{QueryExt, RemoveItem, Summable};

pub mod prelude {
  pub use crate::group::{GroupByKey, KeyGroup};
  pub use crate::query::{QueryExt, RemoveItem, Summable};
}
