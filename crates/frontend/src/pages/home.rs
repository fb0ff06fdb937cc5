use crate::shared::icons::icon;
use crate::shared::meta::use_page_meta;
use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page: hero plus a short services teaser. All static composition.
#[component]
pub fn HomePage() -> impl IntoView {
    use_page_meta(
        "Northlight Studio",
        "A small design and development studio for web, branding, and mobile.",
    );

    view! {
        <div class="page page--home">
            <section class="hero">
                <h1 class="hero__title">"Quiet software, loud results."</h1>
                <p class="hero__lead">
                    "We are a small studio designing and building websites, brands, "
                    "and mobile apps for teams that care about the details."
                </p>
                <div class="hero__actions">
                    <A href="/work">
                        "View our work"
                        {icon("arrow-right")}
                    </A>
                </div>
            </section>
            <section class="home-teaser">
                <h2 class="home-teaser__title">"What we do"</h2>
                <ul class="home-teaser__list">
                    {content::services::all()
                        .iter()
                        .map(|service| view! { <li>{service.title.clone()}</li> })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
