use crate::common::config::{BucketIndex, CourseKey};
use crate::common::exception::CatalogError;

/// Derives the numeric key for a course number.
///
/// # Arguments
///
/// * `course_num` - The course number, e.g. `CS250`.
///
/// # Returns
///
/// The integer parsed from the trailing three characters, which must all be
/// decimal digits. Numbers of three characters or fewer carry no key.
pub fn derive_key(course_num: &str) -> Result<CourseKey, CatalogError> {
    let invalid = || CatalogError::InvalidCourseNumber(course_num.to_string());

    if course_num.len() <= 3 {
        return Err(invalid());
    }

    let suffix = course_num
        .get(course_num.len() - 3..)
        .ok_or_else(invalid)?;
    if !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    suffix.parse::<CourseKey>().map_err(|_| invalid())
}

/// Maps derived course keys onto a fixed bucket array by taking the key
/// modulo the table size.
pub struct ModHasher {
    table_size: usize,
}

impl ModHasher {
    /// Creates a hasher for a table of `table_size` buckets.
    ///
    /// # Returns
    ///
    /// `ZeroTableSize` if `table_size` is zero, since the modulo would be
    /// undefined.
    pub fn new(table_size: usize) -> Result<Self, CatalogError> {
        if table_size == 0 {
            return Err(CatalogError::ZeroTableSize);
        }
        Ok(Self { table_size })
    }

    /// Returns the bucket index for the given key.
    pub fn bucket_for(&self, key: CourseKey) -> BucketIndex {
        key as usize % self.table_size
    }

    pub fn table_size(&self) -> usize {
        self.table_size
    }
}
