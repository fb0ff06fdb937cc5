use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <span>"© 2026 Northlight Studio"</span>
                <span class="site-footer__note">"Design & development, done together."</span>
            </div>
        </footer>
    }
}
