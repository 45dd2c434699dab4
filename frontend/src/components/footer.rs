use chrono::{Datelike, Utc};
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-content">
                <div>{format!("© {} Flames Agency. All rights reserved.", year)}</div>
                <div>{"Built with love, design, and a lot of iteration."}</div>
            </div>
        </footer>
    }
}
