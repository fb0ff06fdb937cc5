use crate::shared::icons::icon;
use content::ServiceRecord;
use leptos::prelude::*;

/// Card for one service offering.
#[component]
pub fn ServiceCard(service: ServiceRecord) -> impl IntoView {
    view! {
        <article class="service-card">
            <div class="service-card__icon">
                {icon(&service.icon)}
            </div>
            <div class="service-card__content">
                <h3 class="service-card__title">{service.title}</h3>
                <p class="service-card__description">{service.description}</p>
                <ul class="service-card__offerings">
                    {service
                        .offerings
                        .into_iter()
                        .map(|offering| view! { <li>{offering}</li> })
                        .collect_view()}
                </ul>
            </div>
        </article>
    }
}
