use crate::shared::api_utils::ApiError;
use crate::shared::config::AfterSubmit;
use crate::shared::list_utils::{sort_list, Sortable};
use contracts::domain::a001_service_job::{Job, JobDto, JobFilter, StatusFilter};
use leptos::prelude::*;
use std::cmp::Ordering;

/// Sequence number of a list request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer response was already applied
    Stale,
    Failed,
}

#[derive(Clone, Debug, Default)]
pub struct JobListState {
    pub jobs: Vec<Job>,
    pub search: String,
    pub status_filter: StatusFilter,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub error: Option<String>,
    pub is_loaded: bool,
    issued: u64,
    applied: u64,
}

impl JobListState {
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    /// Apply a finished list request. Failures never touch `jobs`.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<Job>, ApiError>) -> LoadOutcome {
        if ticket.0 <= self.applied {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(jobs) => {
                self.jobs = jobs;
                self.applied = ticket.0;
                self.is_loaded = true;
                self.error = None;
                LoadOutcome::Applied
            }
            Err(e) => {
                self.error = Some(format!("Failed to load jobs: {}", e));
                LoadOutcome::Failed
            }
        }
    }

    /// React to a successful create. Returns true when the list must be reloaded.
    pub fn record_created(&mut self, dto: JobDto, strategy: AfterSubmit) -> bool {
        self.error = None;
        match strategy {
            AfterSubmit::Refetch => true,
            AfterSubmit::OptimisticAppend => {
                self.jobs.push(Job::from(dto));
                false
            }
        }
    }

    pub fn filter(&self) -> JobFilter {
        JobFilter {
            search: self.search.clone(),
            status: self.status_filter,
        }
    }

    /// Rows to render: filtered over the full collection, then sorted
    pub fn visible_jobs(&self) -> Vec<Job> {
        let mut rows = self.filter().apply(&self.jobs);
        sort_list(&mut rows, &self.sort_field, self.sort_ascending);
        rows
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }
}

impl Sortable for Job {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            // missing serials go last
            "serial" => match (self.serial, other.serial) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            "customer" => self.customer.to_lowercase().cmp(&other.customer.to_lowercase()),
            "plate" => self.plate.to_lowercase().cmp(&other.plate.to_lowercase()),
            "phone" => self.phone.cmp(&other.phone),
            "status" => self.status.to_lowercase().cmp(&other.status.to_lowercase()),
            "service_type" => self
                .service_type
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .cmp(&other.service_type.as_deref().unwrap_or_default().to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

// Create state within component scope instead of thread-local
pub fn create_state() -> RwSignal<JobListState> {
    RwSignal::new(JobListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_service_job::{parse_job_list, JobListError};
    use contracts::enums::job_status::JobStatus;
    use contracts::enums::service_type::ServiceType;

    fn job(serial: Option<i64>, customer: &str, status: &str) -> Job {
        Job {
            serial,
            customer: customer.to_string(),
            plate: format!("P-{}", customer),
            phone: "555".to_string(),
            status: status.to_string(),
            service_type: None,
        }
    }

    #[test]
    fn test_first_load_applies() {
        let mut state = JobListState::default();
        let ticket = state.begin_load();
        let jobs = parse_job_list(
            r#"[{"serial":1,"customer":"A","plate":"X1","phone":"555","status":"Pending"}]"#,
        )
        .unwrap();
        assert_eq!(state.finish_load(ticket, Ok(jobs)), LoadOutcome::Applied);
        assert_eq!(state.visible_jobs().len(), 1);
        assert!(state.is_loaded);
    }

    #[test]
    fn test_failed_first_load_keeps_empty_list() {
        let mut state = JobListState::default();
        let ticket = state.begin_load();
        let outcome = state.finish_load(
            ticket,
            Err(ApiError::Transport("TypeError: Failed to fetch".to_string())),
        );
        assert_eq!(outcome, LoadOutcome::Failed);
        assert!(state.jobs.is_empty());
        assert!(state.error.is_some());
    }

    #[test]
    fn test_non_array_response_keeps_previous_jobs() {
        let mut state = JobListState::default();
        let first = state.begin_load();
        state.finish_load(first, Ok(vec![job(Some(1), "A", "Pending")]));

        let second = state.begin_load();
        let result = parse_job_list(r#"{"result":"error"}"#).map_err(ApiError::from);
        assert_eq!(
            result,
            Err(ApiError::Payload(JobListError::NotAnArray("object")))
        );
        assert_eq!(state.finish_load(second, result), LoadOutcome::Failed);
        assert_eq!(state.jobs, vec![job(Some(1), "A", "Pending")]);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = JobListState::default();
        let older = state.begin_load();
        let newer = state.begin_load();

        assert_eq!(
            state.finish_load(newer, Ok(vec![job(Some(1), "A", "Pending"), job(Some(2), "B", "Pending")])),
            LoadOutcome::Applied
        );
        assert_eq!(
            state.finish_load(older, Ok(vec![job(Some(1), "A", "Pending")])),
            LoadOutcome::Stale
        );
        assert_eq!(state.jobs.len(), 2);
    }

    #[test]
    fn test_older_response_first_then_newer_wins() {
        let mut state = JobListState::default();
        let older = state.begin_load();
        let newer = state.begin_load();
        state.finish_load(older, Ok(vec![job(Some(1), "A", "Pending")]));
        state.finish_load(newer, Ok(vec![job(Some(9), "Z", "Completed")]));
        assert_eq!(state.jobs, vec![job(Some(9), "Z", "Completed")]);
    }

    #[test]
    fn test_success_clears_error() {
        let mut state = JobListState::default();
        let t1 = state.begin_load();
        state.finish_load(t1, Err(ApiError::Status { status: 500 }));
        assert!(state.error.is_some());
        let t2 = state.begin_load();
        state.finish_load(t2, Ok(Vec::new()));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_record_created_refetch() {
        let mut state = JobListState::default();
        assert!(state.record_created(JobDto::default(), AfterSubmit::Refetch));
        assert!(state.jobs.is_empty());
    }

    #[test]
    fn test_record_created_optimistic_append() {
        let mut state = JobListState::default();
        state.jobs = vec![job(Some(1), "A", "Pending")];
        let dto = JobDto {
            customer: "B".to_string(),
            plate: "Y2".to_string(),
            phone: "777".to_string(),
            status: JobStatus::Completed,
            service_type: ServiceType::OilServices,
        };
        assert!(!state.record_created(dto, AfterSubmit::OptimisticAppend));
        assert_eq!(state.jobs.len(), 2);
        let appended = &state.jobs[1];
        assert_eq!(appended.serial, None);
        assert_eq!(appended.customer, "B");
        assert_eq!(appended.status, "Completed");
    }

    #[test]
    fn test_visible_jobs_filters_then_sorts() {
        let mut state = JobListState::default();
        state.jobs = vec![
            job(Some(3), "carol", "Pending"),
            job(Some(1), "Alice", "Completed"),
            job(None, "bob", "Pending"),
            job(Some(2), "dan", "Pending"),
        ];
        state.status_filter = StatusFilter::Only(JobStatus::Pending);

        let serials: Vec<Option<i64>> = state.visible_jobs().iter().map(|j| j.serial).collect();
        assert_eq!(serials, vec![Some(3), None, Some(2)]);

        state.toggle_sort("serial");
        let serials: Vec<Option<i64>> = state.visible_jobs().iter().map(|j| j.serial).collect();
        assert_eq!(serials, vec![Some(2), Some(3), None]);

        state.toggle_sort("customer");
        let names: Vec<String> = state.visible_jobs().into_iter().map(|j| j.customer).collect();
        assert_eq!(names, vec!["bob", "carol", "dan"]);

        state.toggle_sort("customer");
        let names: Vec<String> = state.visible_jobs().into_iter().map(|j| j.customer).collect();
        assert_eq!(names, vec!["dan", "carol", "bob"]);
    }

    #[test]
    fn test_search_does_not_mutate_collection() {
        let mut state = JobListState::default();
        state.jobs = vec![job(Some(1), "Alice", "Pending"), job(Some(2), "Bob", "Pending")];
        state.search = "ALI".to_string();
        assert_eq!(state.visible_jobs().len(), 1);
        assert_eq!(state.jobs.len(), 2);
    }
}
