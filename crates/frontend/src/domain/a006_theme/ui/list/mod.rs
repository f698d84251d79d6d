use contracts::domain::a006_theme::aggregate::ThemeConfig;
use contracts::shared::table::SortDirection;
use leptos::prelude::*;

use crate::shared::components::entity_table::{flag_cell, text_cell, Column};
use crate::shared::components::resource_list::ResourceList;
use crate::shared::theme::ColorEditor;

fn swatches_cell(theme: &ThemeConfig) -> AnyView {
    let colors = [
        theme.primary_color.clone(),
        theme.secondary_color.clone(),
        theme.background_color.clone(),
        theme.text_color.clone(),
    ];
    view! {
        <div class="swatches">
            {colors
                .into_iter()
                .map(|c| view! { <span class="swatch" title=c.clone() style=format!("background: {c};")></span> })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
pub fn ThemeList() -> impl IntoView {
    let columns = vec![
        Column::new("name", "Name", |t: &ThemeConfig| text_cell(&t.name)).width(160.0),
        Column::new("primary_color", "Colors", swatches_cell),
        Column::new("is_active", "Status", |t: &ThemeConfig| flag_cell(t.is_active, "Active", "Inactive")),
    ];

    view! {
        <ResourceList
            page_id="a006_theme--list"
            title="Themes"
            columns=columns
            initial_sort=("name", SortDirection::Asc)
            toggle_labels=("Deactivate", "Activate")
            search_placeholder="Search themes..."
        >
            <ColorEditor />
        </ResourceList>
    }
}
