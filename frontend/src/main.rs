use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod api;
mod config;
mod models;
mod components {
    pub mod footer;
    pub mod lead_form;
    pub mod services;
}
mod pages {
    pub mod faq;
    pub mod landing;
}

use components::footer::Footer;
use pages::landing::Landing;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#work", "Work"),
    ("#process", "Process"),
    ("#faq", "FAQ"),
];

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

// Everything lives on one page; unknown paths get the same landing page.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering landing page");
            html! { <Landing /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <header class="top-nav">
            <div class="container nav-content">
                <a href="#top" class="nav-logo">
                    <span class="nav-logo-mark">{"F"}</span>
                    <span class="nav-logo-text">{"Flames Agency"}</span>
                </a>
                <nav class="nav-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    }) }
                </nav>
                <a href="#book" class="nav-cta">{"Book a call"}</a>
            </div>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <div class="site">
            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #111827;
                        background: #ffffff;
                    }
                    .container {
                        margin: 0 auto;
                        max-width: 80rem;
                        padding: 0 1.5rem;
                    }
                    .section-heading {
                        max-width: 48rem;
                    }
                    .section-heading h2 {
                        font-size: clamp(1.875rem, 3vw, 2.25rem);
                        font-weight: 700;
                        color: #111827;
                        margin: 0;
                    }
                    .section-heading p {
                        margin-top: 0.75rem;
                        font-size: 1.125rem;
                        color: #374151;
                    }
                    .dot {
                        display: inline-block;
                        flex-shrink: 0;
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        margin-top: 0.375rem;
                    }
                    .dot-fuchsia { background: #d946ef; }
                    .dot-cyan { background: #06b6d4; }
                    .dot-amber { background: #f59e0b; }
                    .dot-emerald { background: #10b981; }
                    .bullet-dot {
                        display: inline-block;
                        flex-shrink: 0;
                        width: 0.375rem;
                        height: 0.375rem;
                        margin-top: 0.4rem;
                        border-radius: 9999px;
                        background: #d946ef;
                    }
                    .button-primary, .button-secondary, .nav-cta {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        text-decoration: none;
                        transition: background-color 0.2s ease;
                    }
                    .button-primary, .nav-cta {
                        background: #111827;
                        color: #fff;
                    }
                    .button-primary:hover, .nav-cta:hover {
                        background: #000;
                    }
                    .button-secondary {
                        background: #fff;
                        color: #111827;
                        border: 1px solid #e5e7eb;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 30;
                        backdrop-filter: blur(8px);
                        background: rgba(255, 255, 255, 0.6);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.3);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding-top: 1rem;
                        padding-bottom: 1rem;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        text-decoration: none;
                        color: #111827;
                    }
                    .nav-logo-mark {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 2.25rem;
                        height: 2.25rem;
                        border-radius: 0.5rem;
                        background: linear-gradient(to bottom right, #d946ef, #06b6d4);
                        color: #fff;
                        font-weight: 700;
                    }
                    .nav-logo-text {
                        font-size: 1.25rem;
                        font-weight: 600;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                        font-size: 0.875rem;
                    }
                    .nav-link {
                        color: #374151;
                        text-decoration: none;
                    }
                    .nav-link:hover {
                        color: #111827;
                    }
                    .nav-cta {
                        padding: 0.5rem 1rem;
                    }
                    .site-footer {
                        border-top: 1px solid #e5e7eb;
                        background: #fff;
                    }
                    .footer-content {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        padding-top: 2.5rem;
                        padding-bottom: 2.5rem;
                        font-size: 0.875rem;
                        color: #4b5563;
                    }
                    @media (max-width: 768px) {
                        .nav-links, .nav-cta {
                            display: none;
                        }
                    }
                "#}
            </style>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
                <Footer />
            </BrowserRouter>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();
    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting application, backend at {}", config::get_backend_url());
    yew::Renderer::<App>::new().render();
}
