use super::view_model::JobDetailsViewModel;
use crate::shared::config::PanelConfig;
use crate::shared::icons::icon;
use contracts::domain::a001_service_job::JobDto;
use contracts::enums::job_status::JobStatus;
use contracts::enums::service_type::ServiceType;
use leptos::prelude::*;

#[component]
pub fn JobDetails(
    /// Called with the submitted body after the endpoint accepted it
    on_saved: Callback<JobDto>,
) -> impl IntoView {
    let config = use_context::<PanelConfig>().expect("PanelConfig not found in context");
    let vm = JobDetailsViewModel::new();
    let endpoint = config.endpoint.url;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        // the browser must not navigate away
        ev.prevent_default();
        vm.save_command(endpoint.clone(), on_saved);
    };

    view! {
        <form class="job-form" on:submit=on_submit>
            <input
                type="text"
                class="form__input"
                placeholder="Customer Name"
                required
                prop:value=move || vm.form().customer
                on:input=move |ev| vm.update_form(|f| f.customer = event_target_value(&ev))
            />
            <input
                type="text"
                class="form__input"
                placeholder="Plate Number"
                required
                prop:value=move || vm.form().plate
                on:input=move |ev| vm.update_form(|f| f.plate = event_target_value(&ev))
            />
            <input
                type="tel"
                class="form__input"
                placeholder="Phone Number"
                required
                prop:value=move || vm.form().phone
                on:input=move |ev| vm.update_form(|f| f.phone = event_target_value(&ev))
            />
            <select
                class="form__select"
                required
                on:change=move |ev| {
                    if let Some(status) = JobStatus::from_label(&event_target_value(&ev)) {
                        vm.update_form(|f| f.status = status);
                    }
                }
            >
                {JobStatus::all()
                    .into_iter()
                    .map(|status| {
                        view! {
                            <option
                                value=status.label()
                                prop:selected=move || vm.form().status == status
                            >
                                {status.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <select
                class="form__select"
                on:change=move |ev| {
                    if let Some(service_type) = ServiceType::from_label(&event_target_value(&ev)) {
                        vm.update_form(|f| f.service_type = service_type);
                    }
                }
            >
                {ServiceType::all()
                    .into_iter()
                    .map(|service_type| {
                        view! {
                            <option
                                value=service_type.label()
                                prop:selected=move || vm.form().service_type == service_type
                            >
                                {service_type.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <button
                type="submit"
                class="button button--primary"
                disabled=move || vm.state.with(|s| s.is_submitting)
            >
                {icon("plus")}
                {"Add Job"}
            </button>
        </form>
        {move || vm.state.with(|s| s.error.clone()).map(|e| view! { <div class="error">{e}</div> })}
    }
}
