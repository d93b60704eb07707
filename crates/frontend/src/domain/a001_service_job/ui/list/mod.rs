pub mod palette;
pub mod state;

use self::palette::status_row_color;
use self::state::{create_state, LoadOutcome};
use crate::domain::a001_service_job::ui::details::JobDetails;
use crate::shared::api_utils::{fetch_text, ApiError};
use crate::shared::config::PanelConfig;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, highlight_matches, SearchInput};
use contracts::domain::a001_service_job::{parse_job_list, Job, JobDto, StatusFilter};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn JobList() -> impl IntoView {
    let config = use_context::<PanelConfig>().expect("PanelConfig not found in context");
    let state = create_state();
    let endpoint = StoredValue::new(config.endpoint.url.clone());
    let after_submit = config.submit.after_success;

    let fetch = move || {
        let Some(ticket) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        let url = endpoint.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_jobs(&url).await;
            if let Err(e) = &result {
                log::error!("Error fetching jobs: {}", e);
            }
            let count = result.as_ref().map(Vec::len).unwrap_or_default();
            match state.try_update(|s| s.finish_load(ticket, result)) {
                Some(LoadOutcome::Applied) => log::info!("Loaded {} jobs", count),
                Some(LoadOutcome::Stale) => log::debug!("Discarded stale job list response"),
                _ => {}
            }
        });
    };

    let on_saved = Callback::new(move |dto: JobDto| {
        let reload = state
            .try_update(|s| s.record_created(dto, after_submit))
            .unwrap_or(false);
        if reload {
            fetch();
        }
    });

    let print = move |_: leptos::ev::MouseEvent| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.print() {
                log::error!("Print failed: {:?}", e);
            }
        }
    };

    let sortable_header = move |field: &'static str, title: &'static str| {
        view! {
            <th
                class="table__header-cell table__header-cell--sortable"
                on:click=move |_| state.update(|s| s.toggle_sort(field))
            >
                {title}
                <span class=move || state.with(|s| get_sort_class(&s.sort_field, field))>
                    {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
                </span>
            </th>
        }
    };

    fetch();

    view! {
        <div class="content">
            <div class="no-print">
                <JobDetails on_saved=on_saved />
            </div>

            <div class="header no-print">
                <div class="header__actions">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search.clone()))
                        on_change=Callback::new(move |value: String| state.update(|s| s.search = value))
                        placeholder="Search by customer, plate or phone"
                    />
                    <select
                        class="form__select"
                        on:change=move |ev| {
                            let code = event_target_value(&ev);
                            state.update(|s| s.status_filter = StatusFilter::from_code(&code));
                        }
                    >
                        {StatusFilter::options()
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option
                                        value=option.code()
                                        prop:selected=move || state.with(|s| s.status_filter == option)
                                    >
                                        {option.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                    <button class="button button--secondary" on:click=print>
                        {icon("print")}
                        {"Print"}
                    </button>
                </div>
            </div>

            {move || state.with(|s| s.error.clone()).map(|e| view! { <div class="error no-print">{e}</div> })}

            <div class="table-container">
                <table class="table__data job-table">
                    <thead class="table__head">
                        <tr>
                            {sortable_header("serial", "SL No.")}
                            {sortable_header("customer", "Customer")}
                            {sortable_header("plate", "Plate Number")}
                            {sortable_header("phone", "Phone No.")}
                            {sortable_header("status", "Status")}
                            {sortable_header("service_type", "Service Type")}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let search = state.with(|s| s.search.clone());
                            let rows = state.with(|s| s.visible_jobs());
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="6">{"No jobs to show"}</td>
                                    </tr>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|job| job_row(job, &search))
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn job_row(job: Job, search: &str) -> impl IntoView {
    let background = format!("background-color: {};", status_row_color(&job.status));
    let serial = job
        .serial
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    let service_type = job.service_type.unwrap_or_else(|| "-".to_string());

    view! {
        <tr class="table__row" style=background>
            <td class="table__cell">{serial}</td>
            <td class="table__cell">{highlight_matches(&job.customer, search)}</td>
            <td class="table__cell">{highlight_matches(&job.plate, search)}</td>
            <td class="table__cell">{highlight_matches(&job.phone, search)}</td>
            <td class="table__cell">{job.status}</td>
            <td class="table__cell">{service_type}</td>
        </tr>
    }
}

async fn fetch_jobs(endpoint: &str) -> Result<Vec<Job>, ApiError> {
    let text = fetch_text("GET", endpoint, None).await?;
    Ok(parse_job_list(&text)?)
}
