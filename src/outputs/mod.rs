//! Output stages: run summary reporting and CSV persistence.
//!
//! Both stages run strictly after the parallel enrichment phase and treat
//! their input as read-only. The reporter logs a short statistical summary;
//! the persister projects entries onto the fixed CSV column set.

pub mod csv;
pub mod report;
