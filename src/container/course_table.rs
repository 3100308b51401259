use log::debug;

use crate::catalog::course::Course;
use crate::common::config::{CourseKey, DEFAULT_TABLE_SIZE};
use crate::common::exception::CatalogError;
use crate::container::course_key::{derive_key, ModHasher};

/// How `insert` treats a course number that is already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep both entries in the chain; lookups return the earlier one.
    #[default]
    Append,
    /// Replace the stored course in place.
    Overwrite,
    /// Refuse the insert and leave the table unchanged.
    Reject,
}

/// One occupied entry in a bucket chain. The slot owns its successor, so a
/// whole chain is freed when its head bucket drops.
struct Slot {
    course: Course,
    key: CourseKey,
    next: Option<Box<Slot>>,
}

impl Slot {
    fn new(course: Course, key: CourseKey) -> Self {
        Self {
            course,
            key,
            next: None,
        }
    }
}

/// Fixed-size hash table of courses with separate chaining.
///
/// The bucket count is fixed at construction and never changes; collisions
/// grow the affected bucket's chain instead of triggering a resize, so a
/// pathological key distribution degrades that bucket to a linear scan.
pub struct CourseTable {
    buckets: Vec<Option<Box<Slot>>>,
    hasher: ModHasher,
    policy: DuplicatePolicy,
    len: usize,
}

impl CourseTable {
    /// Creates a table with the default bucket count and duplicate policy.
    pub fn new() -> Self {
        Self::with_table_size(DEFAULT_TABLE_SIZE, DuplicatePolicy::default())
            .expect("default table size is non-zero")
    }

    /// Creates a table with `table_size` buckets.
    ///
    /// # Arguments
    ///
    /// * `table_size` - Number of bucket slots; must be greater than zero.
    /// * `policy` - How inserts of an already-stored course number behave.
    pub fn with_table_size(
        table_size: usize,
        policy: DuplicatePolicy,
    ) -> Result<Self, CatalogError> {
        let hasher = ModHasher::new(table_size)?;
        let mut buckets = Vec::with_capacity(table_size);
        buckets.resize_with(table_size, || None);

        Ok(Self {
            buckets,
            hasher,
            policy,
            len: 0,
        })
    }

    /// Inserts a course under the key derived from its number.
    ///
    /// An empty head slot is populated in place; an occupied bucket has the
    /// new entry appended to the end of its chain. The table never resizes.
    ///
    /// # Returns
    ///
    /// `InvalidCourseNumber` if no key can be derived, or `DuplicateCourse`
    /// when the number is already stored and the policy is `Reject`.
    pub fn insert(&mut self, course: Course) -> Result<(), CatalogError> {
        let key = derive_key(course.get_number())?;
        let index = self.hasher.bucket_for(key);

        match self.policy {
            DuplicatePolicy::Append => {}
            DuplicatePolicy::Overwrite => {
                if let Some(existing) = Self::find_in_chain_mut(&mut self.buckets[index], course.get_number()) {
                    existing.course = course;
                    return Ok(());
                }
            }
            DuplicatePolicy::Reject => {
                if Self::find_in_chain(&self.buckets[index], course.get_number()).is_some() {
                    return Err(CatalogError::DuplicateCourse(
                        course.get_number().to_string(),
                    ));
                }
            }
        }

        let bucket = &mut self.buckets[index];
        if bucket.is_some() {
            debug!(
                "key collision in bucket {index}, chaining {}",
                course.get_number()
            );
        }

        // Walk to the first empty link; covers both the empty head slot and
        // the end of an occupied chain.
        let mut cursor = bucket;
        while let Some(slot) = cursor {
            cursor = &mut slot.next;
        }
        *cursor = Some(Box::new(Slot::new(course, key)));
        self.len += 1;

        Ok(())
    }

    /// Looks up a course by its exact number.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the bucket is empty or no chain entry matches;
    /// `InvalidCourseNumber` when no key can be derived from `course_num`.
    pub fn get(&self, course_num: &str) -> Result<Option<&Course>, CatalogError> {
        let key = derive_key(course_num)?;
        let index = self.hasher.bucket_for(key);

        Ok(Self::find_in_chain(&self.buckets[index], course_num).map(|slot| &slot.course))
    }

    /// Returns every stored `(number, title)` pair sorted by course number.
    ///
    /// Entries are collected bucket by bucket in index order, chains in chain
    /// order, then sorted by lexicographic string comparison of the number.
    /// Suffixes of different widths therefore sort alphabetically, not
    /// numerically (`CS99` lands after `CS250`).
    pub fn list_alphanumeric(&self) -> Vec<(String, String)> {
        let mut listing: Vec<(String, String)> = Vec::with_capacity(self.len);

        for head in &self.buckets {
            let mut cursor = head.as_deref();
            while let Some(slot) = cursor {
                listing.push((
                    slot.course.get_number().to_string(),
                    slot.course.get_title().to_string(),
                ));
                cursor = slot.next.as_deref();
            }
        }

        // Stable sort keeps duplicate numbers in bucket order.
        listing.sort_by(|a, b| a.0.cmp(&b.0));
        listing
    }

    /// Number of stored courses, counting duplicate-number entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bucket count fixed at construction.
    pub fn table_size(&self) -> usize {
        self.hasher.table_size()
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Walks every chain and checks that each slot's stored key still hashes
    /// to the bucket it occupies.
    ///
    /// # Panics
    ///
    /// Panics if a slot is found under the wrong bucket index.
    pub fn verify_integrity(&self) {
        for (index, head) in self.buckets.iter().enumerate() {
            let mut cursor = head.as_deref();
            while let Some(slot) = cursor {
                assert_eq!(
                    self.hasher.bucket_for(slot.key),
                    index,
                    "slot for {} stored under the wrong bucket",
                    slot.course.get_number()
                );
                cursor = slot.next.as_deref();
            }
        }
    }

    fn find_in_chain<'a>(head: &'a Option<Box<Slot>>, course_num: &str) -> Option<&'a Slot> {
        let mut cursor = head.as_deref();
        while let Some(slot) = cursor {
            if slot.course.get_number() == course_num {
                return Some(slot);
            }
            cursor = slot.next.as_deref();
        }
        None
    }

    fn find_in_chain_mut<'a>(
        head: &'a mut Option<Box<Slot>>,
        course_num: &str,
    ) -> Option<&'a mut Slot> {
        let mut cursor = head.as_deref_mut();
        while let Some(slot) = cursor {
            if slot.course.get_number() == course_num {
                return Some(slot);
            }
            cursor = slot.next.as_deref_mut();
        }
        None
    }
}

impl Default for CourseTable {
    fn default() -> Self {
        Self::new()
    }
}
