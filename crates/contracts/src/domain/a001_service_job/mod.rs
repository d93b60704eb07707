pub mod aggregate;
pub mod filter;
pub mod payload;

pub use aggregate::{Job, JobDto};
pub use filter::{JobFilter, StatusFilter};
pub use payload::{parse_job_list, JobListError};
