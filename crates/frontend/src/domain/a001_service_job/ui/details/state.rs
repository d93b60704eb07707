use crate::shared::api_utils::ApiError;
use contracts::domain::a001_service_job::JobDto;

/// Form state for creating a job
#[derive(Clone, Debug, Default)]
pub struct JobFormState {
    pub form: JobDto,
    pub error: Option<String>,
    pub is_submitting: bool,
}

impl JobFormState {
    /// Validate and mark the form as in flight. Returns the body to send.
    pub fn begin_submit(&mut self) -> Option<JobDto> {
        if self.is_submitting {
            return None;
        }
        if let Err(msg) = self.form.validate() {
            self.error = Some(msg.to_string());
            return None;
        }
        self.error = None;
        self.is_submitting = true;
        Some(self.form.clone())
    }

    /// Success resets every field to its default; failure keeps what was typed.
    pub fn finish_submit(&mut self, result: &Result<String, ApiError>) {
        self.is_submitting = false;
        match result {
            Ok(_) => {
                self.form = JobDto::default();
                self.error = None;
            }
            Err(e) => self.error = Some(format!("Failed to add job: {}", e)),
        }
    }
}
