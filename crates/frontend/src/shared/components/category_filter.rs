use crate::shared::categories::display_label;
use crate::shared::components::ui::Button;
use leptos::prelude::*;

/// Row of category filter buttons for the work gallery.
///
/// Sole writer of `selected`: clicking a button sets the signal to that
/// button's category label. Exactly one button is emphasized at a time,
/// the one whose label equals the current selection.
#[component]
pub fn CategoryFilter(
    /// Labels from `category_labels`, `"all"` first
    categories: Vec<String>,
    /// Selected category, owned by the page
    #[prop(into)]
    selected: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="category-filter">
            {categories
                .into_iter()
                .map(|category| {
                    let label = display_label(&category).to_string();
                    let value = category.clone();
                    let variant = Signal::derive({
                        let value = value.clone();
                        move || {
                            if selected.get() == value {
                                "primary".to_string()
                            } else {
                                "ghost".to_string()
                            }
                        }
                    });
                    let on_click = Callback::new(move |_| selected.set(value.clone()));
                    view! {
                        <Button
                            variant=variant
                            size="sm".to_string()
                            class="category-filter__button".to_string()
                            on_click=on_click
                        >
                            {label}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}
