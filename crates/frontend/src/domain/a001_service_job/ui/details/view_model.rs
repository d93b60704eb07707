use super::model;
use super::state::JobFormState;
use contracts::domain::a001_service_job::JobDto;
use leptos::prelude::*;

/// ViewModel for the new job form
#[derive(Clone, Copy)]
pub struct JobDetailsViewModel {
    pub state: RwSignal<JobFormState>,
}

impl JobDetailsViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(JobFormState::default()),
        }
    }

    pub fn form(&self) -> JobDto {
        self.state.with(|s| s.form.clone())
    }

    pub fn update_form(&self, f: impl FnOnce(&mut JobDto)) {
        self.state.update(|s| f(&mut s.form));
    }

    /// Send the form; `on_saved` receives the body that was accepted
    pub fn save_command(&self, endpoint: String, on_saved: Callback<JobDto>) {
        let Some(dto) = self.state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::save_form(&endpoint, &dto).await;
            match &result {
                Ok(text) => log::debug!("Create job response: {}", text),
                Err(e) => log::error!("Error adding job: {}", e),
            }
            let saved = result.is_ok();
            state.update(|s| s.finish_submit(&result));
            if saved {
                on_saved.run(dto);
            }
        });
    }
}

impl Default for JobDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
