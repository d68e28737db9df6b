//! Requirement tally: required versus feasibly scheduled hours.
//!
//! One row per (group, course, kind) triple in the catalog. A session
//! counts as scheduled when the timetable is evaluated and the session
//! carries no hard violation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::ga::Timetable;
use crate::models::{CourseId, GroupId};

/// Completion status of a requirement row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequirementStatus {
    /// Fewer sessions scheduled than required.
    Under,
    /// Exactly as many as required.
    Met,
    /// More than required.
    Over,
}

impl RequirementStatus {
    /// Classifies a scheduled count against a required count.
    pub fn from_counts(required: usize, scheduled: usize) -> Self {
        match scheduled.cmp(&required) {
            std::cmp::Ordering::Less => Self::Under,
            std::cmp::Ordering::Equal => Self::Met,
            std::cmp::Ordering::Greater => Self::Over,
        }
    }
}

/// Requirement row for one (group, course, kind).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementRow {
    /// Group id.
    pub group_id: GroupId,
    /// Course id.
    pub course_id: CourseId,
    /// Year label of the group.
    pub year: String,
    /// Group name.
    pub group: String,
    /// Course name.
    pub course: String,
    /// Professor of the lowest-id session in the row.
    pub professor: String,
    /// Lab sessions.
    pub is_lab: bool,
    /// Sessions required.
    pub required: usize,
    /// Sessions scheduled without a hard violation.
    pub scheduled: usize,
    /// Completion status.
    pub status: RequirementStatus,
}

impl RequirementRow {
    /// `"Lab"` or `"Theory"`.
    pub fn kind_label(&self) -> &'static str {
        if self.is_lab {
            "Lab"
        } else {
            "Theory"
        }
    }

    /// Progress label, e.g. `"2/3 Done"`.
    pub fn status_label(&self) -> String {
        format!("{}/{} Done", self.scheduled, self.required)
    }
}

/// Builds the requirement table, ordered by group, course, then kind.
///
/// Without a timetable, or with an unevaluated one, every row reports
/// zero scheduled sessions.
pub fn requirement_table(catalog: &Catalog, timetable: Option<&Timetable>) -> Vec<RequirementRow> {
    let score = timetable.and_then(Timetable::score);
    let mut rows: BTreeMap<(GroupId, CourseId, bool), RequirementRow> = BTreeMap::new();

    for (&id, session) in catalog.sessions() {
        let key = (session.group_id, session.course_id, session.is_lab);
        let row = rows.entry(key).or_insert_with(|| {
            let group = catalog.group(session.group_id);
            RequirementRow {
                group_id: session.group_id,
                course_id: session.course_id,
                year: group.map(|g| g.year().to_string()).unwrap_or_default(),
                group: group.map(|g| g.name.clone()).unwrap_or_default(),
                course: catalog
                    .course(session.course_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default(),
                professor: catalog
                    .professor(session.professor_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_default(),
                is_lab: session.is_lab,
                required: 0,
                scheduled: 0,
                status: RequirementStatus::Met,
            }
        });
        row.required += 1;
        if score.is_some_and(|s| s.violation_for(id).is_none()) {
            row.scheduled += 1;
        }
    }

    rows.into_values()
        .map(|mut row| {
            row.status = RequirementStatus::from_counts(row.required, row.scheduled);
            row
        })
        .collect()
}
