use serde::{Deserialize, Serialize};

/// Статус работы в мастерской
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl JobStatus {
    /// Значение, которое уходит в таблицу и приходит обратно
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Pending => "Pending",
            JobStatus::InProgress => "In Progress",
            JobStatus::Completed => "Completed",
        }
    }

    /// Получить все статусы в порядке жизненного цикла
    pub fn all() -> Vec<JobStatus> {
        vec![JobStatus::Pending, JobStatus::InProgress, JobStatus::Completed]
    }

    /// Парсинг из строки. Старые записи со свободным текстом дают None.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Pending" => Some(JobStatus::Pending),
            "In Progress" => Some(JobStatus::InProgress),
            "Completed" => Some(JobStatus::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
