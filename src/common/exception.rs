use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid course number '{0}': expected a letter prefix and a 3-digit suffix")]
    InvalidCourseNumber(String),
    #[error("Course table size must be greater than zero")]
    ZeroTableSize,
    #[error("Course {0} is already in the catalog")]
    DuplicateCourse(String),
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
}
