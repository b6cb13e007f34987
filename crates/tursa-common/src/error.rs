use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog is empty: at least one project is required")]
    Empty,

    #[error("Duplicate project id: {0}")]
    DuplicateId(String),

    #[error("Project id must not be blank (project: {0})")]
    BlankId(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
