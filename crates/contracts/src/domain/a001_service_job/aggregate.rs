use serde::{Deserialize, Serialize};

use crate::enums::job_status::JobStatus;
use crate::enums::service_type::ServiceType;

// ============================================================================
// Record
// ============================================================================

/// Работа в мастерской, как её отдаёт внешняя таблица.
///
/// `serial` назначает внешняя сторона, поэтому у только что созданных
/// (ещё не перечитанных) записей его нет. `status` хранится текстом:
/// старые записи могут содержать произвольные значения.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<i64>,
    pub customer: String,
    pub plate: String,
    pub phone: String,
    pub status: String,
    #[serde(rename = "serviceType", default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
}

impl Job {
    /// Статус из перечисления, если текст ему соответствует
    pub fn status_kind(&self) -> Option<JobStatus> {
        JobStatus::from_label(&self.status)
    }
}

impl From<JobDto> for Job {
    fn from(dto: JobDto) -> Self {
        Self {
            serial: None,
            customer: dto.customer,
            plate: dto.plate,
            phone: dto.phone,
            status: dto.status.label().to_string(),
            service_type: Some(dto.service_type.label().to_string()),
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Тело запроса на создание работы. Серийный номер не передаётся.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDto {
    pub customer: String,
    pub plate: String,
    pub phone: String,
    pub status: JobStatus,
    #[serde(rename = "serviceType")]
    pub service_type: ServiceType,
}

impl JobDto {
    /// Валидация обязательных полей
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.customer.trim().is_empty() {
            return Err("Customer name is required");
        }
        if self.plate.trim().is_empty() {
            return Err("Plate number is required");
        }
        if self.phone.trim().is_empty() {
            return Err("Phone number is required");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_dto() -> JobDto {
        JobDto {
            customer: "B".to_string(),
            plate: "Y2".to_string(),
            phone: "777".to_string(),
            status: JobStatus::Completed,
            service_type: ServiceType::OilServices,
        }
    }

    #[test]
    fn test_dto_defaults() {
        let dto = JobDto::default();
        assert_eq!(dto.customer, "");
        assert_eq!(dto.plate, "");
        assert_eq!(dto.phone, "");
        assert_eq!(dto.status, JobStatus::Pending);
        assert_eq!(dto.service_type, ServiceType::TyreServices);
    }

    #[test]
    fn test_dto_wire_shape_has_no_serial() {
        let value = serde_json::to_value(sample_dto()).unwrap();
        assert_eq!(
            value,
            json!({
                "customer": "B",
                "plate": "Y2",
                "phone": "777",
                "status": "Completed",
                "serviceType": "Oil Services"
            })
        );
    }

    #[test]
    fn test_validate_requires_text_fields() {
        assert!(sample_dto().validate().is_ok());

        let mut dto = sample_dto();
        dto.customer = "   ".to_string();
        assert!(dto.validate().is_err());

        let mut dto = sample_dto();
        dto.plate.clear();
        assert!(dto.validate().is_err());

        let mut dto = sample_dto();
        dto.phone.clear();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_job_from_dto_has_no_serial() {
        let job = Job::from(sample_dto());
        assert_eq!(job.serial, None);
        assert_eq!(job.status, "Completed");
        assert_eq!(job.service_type.as_deref(), Some("Oil Services"));
        assert_eq!(job.status_kind(), Some(JobStatus::Completed));
    }

    #[test]
    fn test_status_kind_for_free_text() {
        let mut job = Job::from(sample_dto());
        job.status = "waiting".to_string();
        assert_eq!(job.status_kind(), None);
    }
}
