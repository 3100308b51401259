use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// One catalog entry. The course number doubles as the lookup key; the
/// prerequisite list holds opaque course numbers that are never resolved
/// against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    course_num: String,
    title: String,
    prerequisites: Vec<String>,
}

impl Course {
    pub fn new(course_num: &str, title: &str) -> Self {
        Self {
            course_num: course_num.to_string(),
            title: title.to_string(),
            prerequisites: Vec::new(),
        }
    }

    pub fn with_prerequisites(course_num: &str, title: &str, prerequisites: Vec<String>) -> Self {
        Self {
            course_num: course_num.to_string(),
            title: title.to_string(),
            prerequisites,
        }
    }

    pub fn get_number(&self) -> &str {
        &self.course_num
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() && self.has_prerequisites() {
            write!(
                f,
                "{}: {}\nPrerequisites: {}",
                self.course_num,
                self.title,
                self.prerequisites.join(", ")
            )
        } else {
            write!(f, "{}: {}", self.course_num, self.title)
        }
    }
}
