use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
  #[error("Collection has no items.")]
  EmptyCollection,

  #[error("Collection has more than one item.")]
  MultipleItems,
}

pub type Result<T> = std::result::Result<T, QueryError>;
