use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::api::{BackendClient, Transport};
use crate::models::Service;

pub const SKELETON_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ServicesState {
    pub loading: bool,
    pub services: Vec<Service>,
}

impl Default for ServicesState {
    fn default() -> Self {
        Self {
            loading: true,
            services: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridEntry<'a> {
    Skeleton(usize),
    Card(&'a Service),
}

impl ServicesState {
    pub fn settled(services: Vec<Service>) -> Self {
        Self {
            loading: false,
            services,
        }
    }

    pub fn entries(&self) -> Vec<GridEntry<'_>> {
        if self.loading {
            (0..SKELETON_COUNT).map(GridEntry::Skeleton).collect()
        } else {
            self.services.iter().map(GridEntry::Card).collect()
        }
    }
}

/// Never fails: anything that goes wrong becomes an empty list.
pub async fn load_services<T: Transport>(client: &BackendClient<T>) -> Vec<Service> {
    match client.list_services().await {
        Ok(services) => {
            info!("Loaded {} services", services.len());
            services
        }
        Err(e) => {
            warn!("Failed to load services from {}: {}", client.base_url(), e);
            Vec::new()
        }
    }
}

/// Loads the list and hands the settled state to `set`, unless the page has
/// gone away while the request was out.
pub async fn refresh_services<T: Transport>(
    client: &BackendClient<T>,
    is_mounted: impl Fn() -> bool,
    set: impl FnOnce(ServicesState),
) {
    let services = load_services(client).await;
    if is_mounted() {
        set(ServicesState::settled(services));
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    html! {
        <div class="service-card">
            <div class="service-card-header">
                <h3>{&service.title}</h3>
                <span class="service-tag">{service.tag()}</span>
            </div>
            <p class="service-description">{&service.description}</p>
            <ul class="service-bullets">
                { for service.bullets.iter().map(|bullet| html! {
                    <li>
                        <span class="bullet-dot"></span>
                        <span>{bullet}</span>
                    </li>
                }) }
            </ul>
            <a href="#book" class="service-cta">{&service.cta}</a>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let client = use_memo(|_| BackendClient::from_config(), ());
    let state = use_state(ServicesState::default);
    let is_mounted = use_is_mounted();

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    refresh_services(client.as_ref(), || is_mounted(), move |s| state.set(s)).await;
                });
                || ()
            },
            (),
        );
    }

    html! {
        <section id="services" class="services-section">
            <style>
                {r#"
                    .services-section {
                        padding: 6rem 0;
                        background: linear-gradient(to bottom, #ffffff, #f9fafb);
                    }
                    .services-grid {
                        margin-top: 3rem;
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 1.5rem;
                    }
                    .service-card, .service-skeleton {
                        border-radius: 1rem;
                        background: #fff;
                        border: 1px solid #e5e7eb;
                        padding: 1.5rem;
                    }
                    .service-card {
                        transition: box-shadow 0.2s ease;
                    }
                    .service-card:hover {
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }
                    .service-skeleton {
                        height: 14rem;
                        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }
                    @keyframes pulse {
                        50% { opacity: 0.5; }
                    }
                    .service-card-header {
                        display: flex;
                        align-items: flex-start;
                        justify-content: space-between;
                    }
                    .service-card-header h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #111827;
                    }
                    .service-tag {
                        border-radius: 0.375rem;
                        background: #f3f4f6;
                        padding: 0.25rem 0.5rem;
                        font-size: 0.75rem;
                        color: #374151;
                    }
                    .service-description {
                        margin-top: 0.5rem;
                        color: #374151;
                    }
                    .service-bullets {
                        margin-top: 1rem;
                        list-style: none;
                        padding: 0;
                        font-size: 0.875rem;
                        color: #374151;
                    }
                    .service-bullets li {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.5rem;
                        margin-bottom: 0.5rem;
                    }
                    .service-cta {
                        display: inline-flex;
                        margin-top: 1.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #111827;
                        text-decoration: underline;
                        text-underline-offset: 4px;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-heading">
                    <h2>{"What we do"}</h2>
                    <p>{"Proven programs designed to move the metrics that matter."}</p>
                </div>
                <div class="services-grid">
                    { for state.entries().into_iter().map(|entry| match entry {
                        GridEntry::Skeleton(i) => html! { <div key={format!("skeleton-{}", i)} class="service-skeleton"></div> },
                        GridEntry::Card(service) => html! { <ServiceCard key={service.slug.clone()} service={service.clone()} /> },
                    }) }
                </div>
            </div>
        </section>
    }
}
