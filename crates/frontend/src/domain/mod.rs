pub mod a001_service_job;
