use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::api::{BackendClient, Transport};
use crate::models::{BudgetRange, LeadField, LeadSubmission, ServiceInterest};

const SELLING_POINTS: &[(&str, &str)] = &[
    ("dot-fuchsia", "Actionable audit with quick wins"),
    ("dot-cyan", "Clear KPIs and roadmap"),
    ("dot-amber", "No fluff. No obligation."),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadFormState {
    pub form: LeadSubmission,
    pub status: SubmitStatus,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeadFormAction {
    Edit(LeadField, String),
    Submit,
    Succeeded,
    Failed(String),
}

impl Reducible for LeadFormState {
    type Action = LeadFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LeadFormAction::Edit(field, value) => Rc::new(Self {
                form: self.form.clone().with_field(field, value),
                status: self.status,
                error: self.error.clone(),
            }),
            LeadFormAction::Submit if self.is_submitting() => self,
            LeadFormAction::Submit => Rc::new(Self {
                form: self.form.clone(),
                status: SubmitStatus::Loading,
                error: String::new(),
            }),
            LeadFormAction::Succeeded => Rc::new(Self {
                form: LeadSubmission::default(),
                status: SubmitStatus::Success,
                error: String::new(),
            }),
            LeadFormAction::Failed(message) => Rc::new(Self {
                form: self.form.clone(),
                status: SubmitStatus::Error,
                error: message,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success,
    Error(String),
}

impl Banner {
    pub fn class(&self) -> &'static str {
        match self {
            Banner::Success => "lead-banner success",
            Banner::Error(_) => "lead-banner error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Banner::Success => "Thanks! We’ll be in touch shortly.",
            Banner::Error(message) => message,
        }
    }
}

impl LeadFormState {
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Loading
    }

    pub fn banner(&self) -> Option<Banner> {
        match self.status {
            SubmitStatus::Success => Some(Banner::Success),
            SubmitStatus::Error => Some(Banner::Error(self.error.clone())),
            SubmitStatus::Idle | SubmitStatus::Loading => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Submitting…"
        } else {
            "Request my plan"
        }
    }
}

/// What the submit handler should do with a click.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitGate {
    Send(LeadSubmission),
    Busy,
    Invalid(String),
}

/// Decides whether a click starts a request. `in_flight` is set here and
/// cleared by [`run_submission`], so clicks landing before the re-render that
/// disables the button are still dropped.
pub fn begin_submission(state: &LeadFormState, in_flight: &RefCell<bool>) -> SubmitGate {
    if *in_flight.borrow() || state.is_submitting() {
        return SubmitGate::Busy;
    }
    if let Some(message) = state.form.validation_message() {
        return SubmitGate::Invalid(message);
    }
    *in_flight.borrow_mut() = true;
    SubmitGate::Send(state.form.clone())
}

pub async fn submit_lead<T: Transport>(client: &BackendClient<T>, lead: LeadSubmission) -> LeadFormAction {
    match client.submit_lead(&lead).await {
        Ok(()) => {
            info!("Lead submitted");
            LeadFormAction::Succeeded
        }
        Err(e) => {
            warn!("Lead submission failed: {:?}", e);
            LeadFormAction::Failed(e.to_string())
        }
    }
}

pub async fn run_submission<T: Transport>(
    client: &BackendClient<T>,
    lead: LeadSubmission,
    in_flight: &RefCell<bool>,
    is_mounted: impl Fn() -> bool,
    dispatch: impl FnOnce(LeadFormAction),
) {
    let outcome = submit_lead(client, lead).await;
    *in_flight.borrow_mut() = false;
    if is_mounted() {
        dispatch(outcome);
    }
}

fn on_input(state: &UseReducerHandle<LeadFormState>, field: LeadField) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.dispatch(LeadFormAction::Edit(field, input.value()));
    })
}

fn on_select(state: &UseReducerHandle<LeadFormState>, field: LeadField) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        state.dispatch(LeadFormAction::Edit(field, select.value()));
    })
}

#[function_component(LeadForm)]
pub fn lead_form() -> Html {
    let client = use_memo(|_| BackendClient::from_config(), ());
    let state = use_reducer(LeadFormState::default);
    let is_mounted = use_is_mounted();
    // The handle captured by a callback is a snapshot of the state.
    let in_flight = use_mut_ref(|| false);

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let lead = match begin_submission(&state, &in_flight) {
                SubmitGate::Send(lead) => lead,
                SubmitGate::Busy => return,
                SubmitGate::Invalid(message) => {
                    state.dispatch(LeadFormAction::Failed(message));
                    return;
                }
            };
            state.dispatch(LeadFormAction::Submit);

            let state = state.clone();
            let client = client.clone();
            let is_mounted = is_mounted.clone();
            let in_flight = in_flight.clone();
            spawn_local(async move {
                run_submission(
                    client.as_ref(),
                    lead,
                    &in_flight,
                    || is_mounted(),
                    move |action| state.dispatch(action),
                )
                .await;
            });
        })
    };

    let form = &state.form;
    let service_value = form.service.map(ServiceInterest::value).unwrap_or_default();
    let budget_value = form.budget.map(BudgetRange::value).unwrap_or_default();

    html! {
        <section id="book" class="lead-section">
            <style>
                {r#"
                    .lead-section {
                        padding: 6rem 0;
                    }
                    .lead-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 3rem;
                    }
                    .lead-points {
                        margin-top: 1.5rem;
                        list-style: none;
                        padding: 0;
                        color: #374151;
                    }
                    .lead-points li {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        margin-bottom: 0.75rem;
                    }
                    .lead-form {
                        border-radius: 1rem;
                        background: #fff;
                        border: 1px solid #e5e7eb;
                        padding: 1.5rem;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .lead-fields {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1rem;
                    }
                    .lead-fields .wide {
                        grid-column: span 2;
                    }
                    .lead-fields label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                    }
                    .lead-fields input, .lead-fields select, .lead-fields textarea {
                        margin-top: 0.25rem;
                        width: 100%;
                        border-radius: 0.5rem;
                        border: 1px solid #d1d5db;
                        padding: 0.5rem 0.75rem;
                        box-sizing: border-box;
                    }
                    .lead-banner {
                        margin-bottom: 1rem;
                        border-radius: 0.5rem;
                        padding: 0.75rem 1rem;
                    }
                    .lead-banner.success {
                        background: #ecfdf5;
                        color: #047857;
                    }
                    .lead-banner.error {
                        background: #fef2f2;
                        color: #b91c1c;
                    }
                    .lead-submit {
                        margin-top: 1.5rem;
                        width: 100%;
                        border: none;
                        border-radius: 0.5rem;
                        background: #111827;
                        color: #fff;
                        padding: 0.75rem 1.5rem;
                        cursor: pointer;
                    }
                    .lead-submit:disabled {
                        opacity: 0.6;
                        cursor: default;
                    }
                    .lead-footnote {
                        margin-top: 0.75rem;
                        font-size: 0.75rem;
                        color: #6b7280;
                        text-align: center;
                    }
                    @media (max-width: 640px) {
                        .lead-fields {
                            grid-template-columns: 1fr;
                        }
                        .lead-fields .wide {
                            grid-column: span 1;
                        }
                    }
                "#}
            </style>
            <div class="container lead-grid">
                <div>
                    <div class="section-heading">
                        <h2>{"Get your free growth plan"}</h2>
                        <p>{"Tell us about your goals. We’ll review your current funnel and send back a tailored 90-day plan."}</p>
                    </div>
                    <ul class="lead-points">
                        { for SELLING_POINTS.iter().map(|(dot, text)| html! {
                            <li><span class={classes!("dot", *dot)}></span>{*text}</li>
                        }) }
                    </ul>
                </div>
                <form class="lead-form" onsubmit={onsubmit}>
                    if let Some(banner) = state.banner() {
                        <div class={banner.class()}>{banner.message().to_string()}</div>
                    }
                    <div class="lead-fields">
                        <div>
                            <label>{"Name"}</label>
                            <input
                                required={true}
                                value={form.name.clone()}
                                oninput={on_input(&state, LeadField::Name)}
                                placeholder="Jane Doe"
                            />
                        </div>
                        <div>
                            <label>{"Email"}</label>
                            <input
                                required={true}
                                type="email"
                                value={form.email.clone()}
                                oninput={on_input(&state, LeadField::Email)}
                                placeholder="jane@company.com"
                            />
                        </div>
                        <div>
                            <label>{"Company"}</label>
                            <input
                                value={form.company.clone()}
                                oninput={on_input(&state, LeadField::Company)}
                                placeholder="Acme Inc."
                            />
                        </div>
                        <div>
                            <label>{"Service"}</label>
                            <select onchange={on_select(&state, LeadField::Service)}>
                                <option value="" selected={service_value.is_empty()}>{"Select..."}</option>
                                { for ServiceInterest::ALL.iter().map(|s| html! {
                                    <option value={s.value()} selected={service_value == s.value()}>{s.label()}</option>
                                }) }
                            </select>
                        </div>
                        <div class="wide">
                            <label>{"Budget"}</label>
                            <select onchange={on_select(&state, LeadField::Budget)}>
                                <option value="" selected={budget_value.is_empty()}>{"Select a range"}</option>
                                { for BudgetRange::ALL.iter().map(|b| html! {
                                    <option value={b.value()} selected={budget_value == b.value()}>{b.label()}</option>
                                }) }
                            </select>
                        </div>
                        <div class="wide">
                            <label>{"Message"}</label>
                            <textarea
                                rows="4"
                                value={form.message.clone()}
                                oninput={{
                                    let state = state.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                                        state.dispatch(LeadFormAction::Edit(LeadField::Message, input.value()));
                                    })
                                }}
                                placeholder="Goals, timelines, links…"
                            />
                        </div>
                    </div>
                    <button class="lead-submit" type="submit" disabled={state.is_submitting()}>
                        {state.submit_label()}
                    </button>
                    <p class="lead-footnote">{"We’ll reply within 1 business day."}</p>
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::api::testing::FakeTransport;
    use crate::api::{ApiError, LEAD_REJECTED_MESSAGE};

    fn reduce(state: LeadFormState, action: LeadFormAction) -> LeadFormState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn typed(state: LeadFormState, entries: &[(LeadField, &str)]) -> LeadFormState {
        entries.iter().fold(state, |state, (field, value)| {
            reduce(state, LeadFormAction::Edit(*field, value.to_string()))
        })
    }

    fn valid() -> LeadFormState {
        typed(
            LeadFormState::default(),
            &[
                (LeadField::Name, "Jane Doe"),
                (LeadField::Email, "jane@company.com"),
                (LeadField::Company, "Acme Inc."),
                (LeadField::Service, "ads"),
                (LeadField::Message, "Need pipeline"),
            ],
        )
    }

    /// Mirrors the submit handler: gate, enter loading, send, apply the outcome.
    fn run_submit(state: LeadFormState, client: &BackendClient<FakeTransport>) -> LeadFormState {
        let in_flight = RefCell::new(false);
        let lead = match begin_submission(&state, &in_flight) {
            SubmitGate::Send(lead) => lead,
            SubmitGate::Busy => return state,
            SubmitGate::Invalid(message) => return reduce(state, LeadFormAction::Failed(message)),
        };
        let mut state = reduce(state, LeadFormAction::Submit);
        assert_eq!(state.status, SubmitStatus::Loading);
        let mut outcome = None;
        block_on(run_submission(client, lead, &in_flight, || true, |action| outcome = Some(action)));
        assert!(!*in_flight.borrow());
        if let Some(action) = outcome {
            state = reduce(state, action);
        }
        state
    }

    fn client(transport: FakeTransport) -> BackendClient<FakeTransport> {
        BackendClient::new("http://localhost:8000", transport)
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = LeadFormState::default();
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(state.form, LeadSubmission::default());
        assert!(state.error.is_empty());
    }

    #[test]
    fn missing_name_or_email_sends_nothing() {
        let client = client(FakeTransport::status(200, ""));
        for missing in [LeadField::Name, LeadField::Email] {
            let state = typed(valid(), &[(missing, "")]);
            let after = run_submit(state.clone(), &client);
            assert_eq!(after.status, SubmitStatus::Error);
            assert_eq!(after.form, state.form);
        }
        assert_eq!(client.transport().requests(), 0);
    }

    #[test]
    fn malformed_email_shows_validation_message() {
        let client = client(FakeTransport::status(200, ""));
        let email = format!("{}@x.io", "a".repeat(65));
        let state = run_submit(typed(valid(), &[(LeadField::Email, email.as_str())]), &client);
        assert_eq!(state.status, SubmitStatus::Error);
        assert_eq!(state.error, "Please enter a valid email address");
        assert_eq!(state.banner(), Some(Banner::Error("Please enter a valid email address".to_string())));
        assert_eq!(client.transport().requests(), 0);
    }

    #[test]
    fn success_resets_fields_and_shows_banner() {
        let client = client(FakeTransport::status(201, ""));
        let state = run_submit(valid(), &client);
        assert_eq!(state.status, SubmitStatus::Success);
        assert_eq!(state.form, LeadSubmission::default());
        assert!(state.error.is_empty());
        assert_eq!(client.transport().requests(), 1);
    }

    #[test]
    fn rejection_keeps_fields_and_shows_fixed_message() {
        let client = client(FakeTransport::status(500, "boom"));
        let before = valid();
        let state = run_submit(before.clone(), &client);
        assert_eq!(state.status, SubmitStatus::Error);
        assert_eq!(state.error, LEAD_REJECTED_MESSAGE);
        assert_eq!(state.form, before.form);
    }

    #[test]
    fn network_failure_shows_transport_message() {
        let transport = FakeTransport::replying(Err(ApiError::Network("Failed to fetch".to_string())));
        let client = client(transport);
        let state = run_submit(valid(), &client);
        assert_eq!(state.status, SubmitStatus::Error);
        assert_eq!(state.error, "Failed to fetch");
        assert_eq!(state.form, valid().form);
    }

    #[test]
    fn loading_blocks_another_submission() {
        let client = client(FakeTransport::status(200, ""));
        let loading = reduce(valid(), LeadFormAction::Submit);
        assert!(loading.is_submitting());
        assert_eq!(begin_submission(&loading, &RefCell::new(false)), SubmitGate::Busy);
        assert_eq!(run_submit(loading.clone(), &client), loading);
        assert_eq!(client.transport().requests(), 0);

        let again = Rc::new(loading.clone());
        assert!(Rc::ptr_eq(&again.clone().reduce(LeadFormAction::Submit), &again));
    }

    #[test]
    fn second_click_before_rerender_is_dropped() {
        let client = client(FakeTransport::status(201, ""));
        let in_flight = RefCell::new(false);
        let state = valid();

        let first = begin_submission(&state, &in_flight);
        assert_eq!(first, SubmitGate::Send(state.form.clone()));
        // The handler still holds the pre-dispatch snapshot here.
        assert_eq!(begin_submission(&state, &in_flight), SubmitGate::Busy);

        if let SubmitGate::Send(lead) = first {
            block_on(run_submission(&client, lead, &in_flight, || true, |_| {}));
        }
        assert_eq!(client.transport().requests(), 1);
        assert!(matches!(begin_submission(&state, &in_flight), SubmitGate::Send(_)));
    }

    #[test]
    fn outcome_after_unmount_is_dropped() {
        let client = client(FakeTransport::status(201, ""));
        let in_flight = RefCell::new(true);
        let mut dispatched = None;
        block_on(run_submission(&client, valid().form, &in_flight, || false, |action| {
            dispatched = Some(action)
        }));

        assert_eq!(dispatched, None);
        assert!(!*in_flight.borrow());
        assert_eq!(client.transport().requests(), 1);
    }

    #[test]
    fn banner_follows_status() {
        let idle = LeadFormState::default();
        assert_eq!(idle.banner(), None);
        assert_eq!(idle.submit_label(), "Request my plan");

        let loading = reduce(valid(), LeadFormAction::Submit);
        assert_eq!(loading.banner(), None);
        assert_eq!(loading.submit_label(), "Submitting…");

        let done = reduce(loading.clone(), LeadFormAction::Succeeded);
        let banner = done.banner().expect("success banner");
        assert_eq!(banner.class(), "lead-banner success");
        assert_eq!(banner.message(), "Thanks! We’ll be in touch shortly.");
        assert_eq!(done.submit_label(), "Request my plan");

        let failed = reduce(loading, LeadFormAction::Failed("Failed to fetch".to_string()));
        let banner = failed.banner().expect("error banner");
        assert_eq!(banner.class(), "lead-banner error");
        assert_eq!(banner.message(), "Failed to fetch");
    }

    #[test]
    fn resubmitting_after_error_clears_message() {
        let failed = reduce(valid(), LeadFormAction::Failed(LEAD_REJECTED_MESSAGE.to_string()));
        let retry = reduce(failed, LeadFormAction::Submit);
        assert_eq!(retry.status, SubmitStatus::Loading);
        assert!(retry.error.is_empty());
    }

    #[test]
    fn edits_keep_status_and_message() {
        let failed = reduce(valid(), LeadFormAction::Failed("nope".to_string()));
        let edited = reduce(failed, LeadFormAction::Edit(LeadField::Budget, "$5k–$10k".to_string()));
        assert_eq!(edited.status, SubmitStatus::Error);
        assert_eq!(edited.error, "nope");
        assert_eq!(edited.form.budget, Some(BudgetRange::Growth));
    }
}
