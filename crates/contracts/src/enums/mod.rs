pub mod job_status;
pub mod service_type;
