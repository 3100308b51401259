use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use crate::catalog::course::Course;
use crate::common::exception::CatalogError;
use crate::container::course_table::CourseTable;

/// Outcome of a bulk load: rows that became courses vs. rows skipped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// Loads a comma-delimited catalog file into the table.
///
/// Each row is `number,title[,prerequisite...]`. Rows with fewer than two
/// fields and rows whose course number fails key derivation are logged and
/// skipped; the remainder of the file still loads. Only failure to read the
/// file itself aborts the load.
pub fn load_catalog(path: &Path, table: &mut CourseTable) -> Result<LoadSummary, CatalogError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    info!("loading catalog file {}", path.display());

    let mut summary = LoadSummary::default();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let row = line.trim_end_matches('\r');
        if row.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = row.split(',').collect();
        if fields.len() < 2 {
            warn!(
                "line {}: expected a course number and title, skipping row",
                line_no + 1
            );
            summary.skipped += 1;
            continue;
        }

        let prerequisites = fields[2..].iter().map(|f| f.to_string()).collect();
        let course = Course::with_prerequisites(fields[0], fields[1], prerequisites);

        match table.insert(course) {
            Ok(()) => summary.loaded += 1,
            Err(err) => {
                warn!("line {}: {}, skipping row", line_no + 1, err);
                summary.skipped += 1;
            }
        }
    }

    info!(
        "catalog load complete: {} courses loaded, {} rows skipped",
        summary.loaded, summary.skipped
    );
    Ok(summary)
}
