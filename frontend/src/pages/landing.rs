use yew::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::components::services::Services;
use crate::pages::faq::Faq;

const HERO_HIGHLIGHTS: &[(&str, &str)] = &[
    ("dot-fuchsia", "Performance-first"),
    ("dot-cyan", "ICP-aligned content"),
    ("dot-amber", "Design that converts"),
];

const OUTCOMES: &[(&str, &str)] = &[
    ("4.2x", "ROAS in 90 days (paid)"),
    ("+180%", "Organic traffic in 6 months (SEO)"),
    ("3–5x", "Profile views & inbound (LinkedIn)"),
    ("-62%", "Time-to-ship with AI automations"),
    ("48h", "Avg. design sprint turnaround"),
    ("+35%", "CVR uplift after CRO sprints"),
];

const PROCESS_STEPS: &[(&str, &str)] = &[
    ("Audit", "We analyze traffic, funnel, content, and ops to identify 90-day wins."),
    ("Plan", "We design a sprint roadmap with clear owners, KPIs, and deadlines."),
    ("Execute", "We ship ads, content, design, and automations in weekly cycles."),
    ("Optimize", "We review, learn, and compound what converts. Rinse and repeat."),
];

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section id="top" class="hero-section">
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        background:
                            radial-gradient(circle at 80% 20%, rgba(217, 70, 239, 0.25), transparent 40%),
                            radial-gradient(circle at 20% 80%, rgba(6, 182, 212, 0.25), transparent 40%),
                            #ffffff;
                    }
                    .hero-content {
                        max-width: 48rem;
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.7);
                        padding: 0.25rem 0.75rem;
                        font-size: 0.75rem;
                        font-weight: 500;
                        color: #374151;
                        border: 1px solid #e5e7eb;
                    }
                    .hero-section h1 {
                        margin-top: 1.5rem;
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        font-weight: 800;
                        line-height: 1.1;
                        color: #111827;
                    }
                    .hero-lead {
                        margin-top: 1.25rem;
                        font-size: 1.25rem;
                        color: #374151;
                    }
                    .hero-actions {
                        margin-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .hero-highlights {
                        margin-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1.5rem;
                        font-size: 0.875rem;
                        color: #4b5563;
                    }
                    .hero-highlights div {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                "#}
            </style>
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="dot dot-emerald"></span>
                        {"Available for new projects this month"}
                    </div>
                    <h1>{"Revenue-focused marketing, content, design, and AI automations"}</h1>
                    <p class="hero-lead">
                        {"We build full-funnel systems that attract ideal customers and convert attention into pipeline. "}
                        {"Paid growth, SEO, LinkedIn personal branding & ghostwriting, design sprints, and automation."}
                    </p>
                    <div class="hero-actions">
                        <a href="#book" class="button-primary">{"Get a free growth plan"}</a>
                        <a href="#services" class="button-secondary">{"Explore services"}</a>
                    </div>
                    <div class="hero-highlights">
                        { for HERO_HIGHLIGHTS.iter().map(|(dot, text)| html! {
                            <div><span class={classes!("dot", *dot)}></span>{*text}</div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Work)]
fn work() -> Html {
    html! {
        <section id="work" class="work-section">
            <style>
                {r#"
                    .work-section {
                        padding: 6rem 0;
                    }
                    .work-grid {
                        margin-top: 3rem;
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                        gap: 1.5rem;
                    }
                    .stat-card {
                        border-radius: 1rem;
                        background: #fff;
                        border: 1px solid #e5e7eb;
                        padding: 2rem;
                    }
                    .stat-value {
                        font-size: 2.25rem;
                        font-weight: 700;
                        background: linear-gradient(to bottom right, #c026d3, #0891b2);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .stat-label {
                        margin-top: 0.5rem;
                        color: #374151;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-heading">
                    <h2>{"Selected outcomes"}</h2>
                    <p>{"A snapshot of results our frameworks consistently produce."}</p>
                </div>
                <div class="work-grid">
                    { for OUTCOMES.iter().map(|(stat, label)| html! {
                        <div class="stat-card">
                            <div class="stat-value">{*stat}</div>
                            <div class="stat-label">{*label}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Process)]
fn process() -> Html {
    html! {
        <section id="process" class="process-section">
            <style>
                {r#"
                    .process-section {
                        padding: 6rem 0;
                        background: linear-gradient(to bottom, #f9fafb, #ffffff);
                    }
                    .process-steps {
                        margin-top: 3rem;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                        list-style: none;
                        padding: 0;
                    }
                    .process-step {
                        position: relative;
                        border-radius: 1rem;
                        background: #fff;
                        border: 1px solid #e5e7eb;
                        padding: 1.5rem;
                    }
                    .step-number {
                        position: absolute;
                        top: -0.75rem;
                        left: 1.5rem;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 1.5rem;
                        height: 1.5rem;
                        border-radius: 9999px;
                        background: #111827;
                        color: #fff;
                        font-size: 0.75rem;
                    }
                    .process-step h3 {
                        margin-top: 0.5rem;
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #111827;
                    }
                    .process-step p {
                        margin-top: 0.25rem;
                        font-size: 0.875rem;
                        color: #374151;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-heading">
                    <h2>{"How we work"}</h2>
                    <p>{"Simple, transparent, outcome-driven."}</p>
                </div>
                <ol class="process-steps">
                    { for PROCESS_STEPS.iter().enumerate().map(|(idx, (title, desc))| html! {
                        <li class="process-step">
                            <span class="step-number">{(idx + 1).to_string()}</span>
                            <h3>{*title}</h3>
                            <p>{*desc}</p>
                        </li>
                    }) }
                </ol>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main>
            <Hero />
            <Services />
            <Work />
            <Process />
            <LeadForm />
            <Faq />
        </main>
    }
}
