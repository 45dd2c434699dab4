use yew::prelude::*;

const FAQS: &[(&str, &str)] = &[
    (
        "What industries do you specialize in?",
        "B2B SaaS, professional services, and tech-enabled companies. That said, our frameworks are adaptable.",
    ),
    (
        "How quickly can we start?",
        "We can typically kick off within 1–2 weeks after the initial audit and plan.",
    ),
    (
        "Do you offer project-based or monthly?",
        "Both. Most clients start with a 90-day sprint, then continue monthly on what performs.",
    ),
    (
        "Can you work with our in-house team?",
        "Absolutely. We slot into your stack and collaborate with marketing, sales, and product.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class="faq-item">
            <h3>{&props.question}</h3>
            <p>{&props.answer}</p>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <style>
                {r#"
                    .faq-section {
                        padding: 6rem 0;
                        background: linear-gradient(to bottom, #ffffff, #f9fafb);
                    }
                    .faq-grid {
                        margin-top: 3rem;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 1.5rem;
                    }
                    .faq-item {
                        border-radius: 1rem;
                        background: #fff;
                        border: 1px solid #e5e7eb;
                        padding: 1.5rem;
                    }
                    .faq-item h3 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #111827;
                    }
                    .faq-item p {
                        margin-top: 0.5rem;
                        color: #374151;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-heading">
                    <h2>{"FAQs"}</h2>
                    <p>{"If it helps you decide faster, we want it here."}</p>
                </div>
                <div class="faq-grid">
                    { for FAQS.iter().map(|(question, answer)| html! {
                        <FaqItem question={question.to_string()} answer={answer.to_string()} />
                    }) }
                </div>
            </div>
        </section>
    }
}
