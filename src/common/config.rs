/** Number of bucket slots a course table allocates when no size is given. */
pub const DEFAULT_TABLE_SIZE: usize = 179;

/** Catalog file read by the `load` command when no --catalog flag is given. */
pub const DEFAULT_CATALOG_FILE: &str = "courses.csv";

pub type CourseKey = u32; // numeric key derived from a course number
pub type BucketIndex = usize; // index into the bucket array
