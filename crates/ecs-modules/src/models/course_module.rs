use crate::Simulator;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub term: &'static str,
    pub definition: &'static str,
}

/// One syllabus unit: reading material plus calculators.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub hours: u32,
    pub topics: &'static [&'static str],
    pub definitions: &'static [Definition],
    pub simulators: &'static [Simulator],
}

impl CourseModule {
    pub fn simulator(&self, id: &str) -> Option<&'static Simulator> {
        self.simulators.iter().find(|s| s.id == id)
    }
}
