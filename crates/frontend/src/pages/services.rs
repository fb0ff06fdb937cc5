use crate::shared::components::page_header::PageHeader;
use crate::shared::components::service_card::ServiceCard;
use crate::shared::meta::use_page_meta;
use leptos::prelude::*;

/// Services page: page header plus one card per service, in data order.
#[component]
pub fn ServicesPage() -> impl IntoView {
    use_page_meta(
        "Services — Northlight Studio",
        "Web design and development, brand identity, mobile apps, and content strategy.",
    );

    view! {
        <div class="page page--services">
            <PageHeader
                title="Services"
                subtitle="What we do, and how we usually do it.".to_string()
            />
            <section class="service-list">
                {content::services::all()
                    .iter()
                    .cloned()
                    .map(|service| view! { <ServiceCard service=service /> })
                    .collect_view()}
            </section>
        </div>
    }
}
