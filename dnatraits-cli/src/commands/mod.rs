pub mod compare;
pub mod heuristics;
pub mod report;
