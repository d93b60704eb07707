use crate::domain::a001_service_job::ui::list::JobList;
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Endpoint and post-create strategy for the whole app
    provide_context(load_config());

    view! {
        <div class="app">
            <h1>{"PITSTOP Workshop Panel"}</h1>
            <JobList />
        </div>
    }
}
