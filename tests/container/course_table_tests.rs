use coursedb::catalog::course::Course;
use coursedb::common::config::DEFAULT_TABLE_SIZE;
use coursedb::container::course_key::derive_key;
use coursedb::container::course_table::{CourseTable, DuplicatePolicy};

use crate::common::logger::init_test_logger;
use crate::{assert_err, assert_ok};

#[test]
fn test_advising_scenario() {
    init_test_logger();
    let mut table =
        assert_ok!(CourseTable::with_table_size(DEFAULT_TABLE_SIZE, DuplicatePolicy::Append));

    // insert the two-course advising catalog
    assert_ok!(table.insert(Course::new("CS101", "Intro to CS")));
    assert_ok!(table.insert(Course::with_prerequisites(
        "CS250",
        "Data Structures",
        vec!["CS101".to_string()],
    )));

    // search returns the stored course with its prerequisite list
    let course = assert_ok!(table.get("CS250")).expect("CS250 should be stored");
    assert_eq!(course.get_title(), "Data Structures");
    assert_eq!(course.get_prerequisites(), ["CS101".to_string()]);

    // the listing is sorted and complete
    let listing = table.list_alphanumeric();
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].0, "CS101");
    assert_eq!(listing[1].0, "CS250");
}

#[test]
fn test_insert_then_probe() {
    init_test_logger();
    let mut table = CourseTable::new();

    let num_courses = 50;

    // insert a spread of keys
    for i in 0..num_courses {
        let number = format!("CS{:03}", 100 + i);
        assert_ok!(table.insert(Course::new(&number, "Elective")));
    }
    assert_eq!(table.len(), num_courses);
    table.verify_integrity();

    // check that they were actually inserted
    for i in 0..num_courses {
        let number = format!("CS{:03}", 100 + i);
        let found = assert_ok!(table.get(&number));
        assert!(found.is_some());
        assert_eq!(found.unwrap().get_number(), number);
    }

    // probe some numbers that were never inserted
    for i in 0..10 {
        let number = format!("CS{:03}", 900 + i);
        assert!(assert_ok!(table.get(&number)).is_none());
    }
}

#[test]
fn test_collisions_share_a_bucket() {
    init_test_logger();
    // with 7 buckets, keys 101, 108 and 115 all map to bucket 3
    let mut table = assert_ok!(CourseTable::with_table_size(7, DuplicatePolicy::Append));

    assert_ok!(table.insert(Course::new("CS101", "Intro to CS")));
    assert_ok!(table.insert(Course::new("EE108", "Circuits")));
    assert_ok!(table.insert(Course::new("ME115", "Statics")));
    table.verify_integrity();

    // every chained entry stays independently retrievable
    assert_eq!(
        assert_ok!(table.get("CS101")).unwrap().get_title(),
        "Intro to CS"
    );
    assert_eq!(assert_ok!(table.get("EE108")).unwrap().get_title(), "Circuits");
    assert_eq!(assert_ok!(table.get("ME115")).unwrap().get_title(), "Statics");

    // and the listing still reports all of them exactly once
    let numbers: Vec<String> = table
        .list_alphanumeric()
        .into_iter()
        .map(|(num, _)| num)
        .collect();
    assert_eq!(numbers, ["CS101", "EE108", "ME115"]);
}

#[test]
fn test_listing_is_lexicographic() {
    init_test_logger();
    let mut table = CourseTable::new();

    assert_ok!(table.insert(Course::new("CS990", "Seminar")));
    assert_ok!(table.insert(Course::new("CS1000", "Capstone")));
    assert_ok!(table.insert(Course::new("BIO110", "Cell Biology")));

    let numbers: Vec<String> = table
        .list_alphanumeric()
        .into_iter()
        .map(|(num, _)| num)
        .collect();
    // raw string order: "CS1000" sorts before "CS990"
    assert_eq!(numbers, ["BIO110", "CS1000", "CS990"]);
}

#[test]
fn test_invalid_numbers_are_recoverable_errors() {
    init_test_logger();
    let mut table = CourseTable::new();

    // too short to derive a key
    assert_err!(table.get("AB"));
    assert_err!(derive_key("AB"));

    // non-digit suffix
    assert_err!(table.insert(Course::new("CSXYZ", "Bad Suffix")));
    assert_eq!(table.len(), 0);

    // the table keeps working after the failures
    assert_ok!(table.insert(Course::new("CS101", "Intro to CS")));
    assert!(assert_ok!(table.get("CS101")).is_some());
}

#[test]
fn test_duplicate_policies() {
    init_test_logger();

    // Append keeps both entries and returns the head-ward one
    let mut append = assert_ok!(CourseTable::with_table_size(7, DuplicatePolicy::Append));
    assert_ok!(append.insert(Course::new("CS101", "First")));
    assert_ok!(append.insert(Course::new("CS101", "Second")));
    assert_eq!(append.len(), 2);
    assert_eq!(assert_ok!(append.get("CS101")).unwrap().get_title(), "First");

    // Overwrite replaces in place
    let mut overwrite = assert_ok!(CourseTable::with_table_size(7, DuplicatePolicy::Overwrite));
    assert_ok!(overwrite.insert(Course::new("CS101", "First")));
    assert_ok!(overwrite.insert(Course::new("CS101", "Second")));
    assert_eq!(overwrite.len(), 1);
    assert_eq!(
        assert_ok!(overwrite.get("CS101")).unwrap().get_title(),
        "Second"
    );

    // Reject refuses the second insert
    let mut reject = assert_ok!(CourseTable::with_table_size(7, DuplicatePolicy::Reject));
    assert_ok!(reject.insert(Course::new("CS101", "First")));
    assert_err!(reject.insert(Course::new("CS101", "Second")));
    assert_eq!(reject.len(), 1);
}

#[test]
fn test_construction_rejects_zero_buckets() {
    init_test_logger();
    assert_err!(CourseTable::with_table_size(0, DuplicatePolicy::Append));
}
