use leptos::*;

use crate::validation::accept_attribute;
use crate::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">{APP_NAME}</a>
                <span class="badge">{accept_attribute()}</span>
            </div>
        </header>
    }
}
