mod introduction;
mod mobile;
mod payments;
mod retailing;
mod security;

use crate::{CourseModule, Simulator};

static CATALOG: [&CourseModule; 5] = [
    &introduction::MODULE,
    &retailing::MODULE,
    &security::MODULE,
    &payments::MODULE,
    &mobile::MODULE,
];

/// All course modules in syllabus order.
pub fn catalog() -> &'static [&'static CourseModule] {
    &CATALOG
}

pub fn find_module(id: &str) -> Option<&'static CourseModule> {
    CATALOG.iter().copied().find(|module| module.id == id)
}

pub fn find_simulator(module_id: &str, simulator_id: &str) -> Option<&'static Simulator> {
    find_module(module_id).and_then(|module| module.simulator(simulator_id))
}
