use crate::enums::job_status::JobStatus;

use super::aggregate::Job;

/// Фильтр по статусу. `All` — значение-заглушка, фильтрация не применяется.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(JobStatus),
}

impl StatusFilter {
    pub const ALL_CODE: &'static str = "all";

    /// Значение для `<option value=...>`
    pub fn code(&self) -> &'static str {
        match self {
            StatusFilter::All => Self::ALL_CODE,
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }

    /// Неизвестный код трактуется как `All`
    pub fn from_code(code: &str) -> Self {
        JobStatus::from_label(code)
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }

    pub fn options() -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(JobStatus::all().into_iter().map(StatusFilter::Only))
            .collect()
    }

    pub fn matches(&self, job: &Job) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => job.status == status.label(),
        }
    }
}

/// Совпадение поискового запроса: имя клиента и номер без учёта регистра,
/// телефон как есть.
pub fn matches_search(job: &Job, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    job.customer.to_lowercase().contains(&needle)
        || job.plate.to_lowercase().contains(&needle)
        || job.phone.contains(query)
}

/// Клиентские критерии отбора. На сервер не отправляются.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub search: String,
    pub status: StatusFilter,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        self.status.matches(job) && matches_search(job, &self.search)
    }

    /// Отбор по полной коллекции с сохранением порядка
    pub fn apply(&self, jobs: &[Job]) -> Vec<Job> {
        jobs.iter().filter(|job| self.matches(job)).cloned().collect()
    }
}
