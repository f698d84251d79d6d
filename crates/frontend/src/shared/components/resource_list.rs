//! Generic management page: fetch a collection, filter, sort and page it,
//! edit records in a [`FormModal`], delete or toggle them.

use contracts::shared::resource::{filter_items, Resource};
use contracts::shared::table::{SortDirection, TableViewModel};
use contracts::shared::validation::{FormFields, FromForm, ValidationErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::entity_table::{Column, EntityTable};
use super::form_modal::FormModal;
use super::pagination_controls::PaginationControls;
use super::toast::use_toaster;
use super::ui::Badge;
use crate::shared::config::use_config;
use crate::shared::crud_api;
use crate::shared::icons::icon;
use crate::shared::list_utils::{use_table_view_from, SearchInput};
use crate::shared::live_updates::use_live_collection;
use crate::shared::page_frame::{PageFrame, PageHeader};

/// Reloads the collection of the enclosing [`ResourceList`]. Custom cells use
/// it after their own mutations.
#[derive(Clone, Copy)]
pub struct ListRefresh(pub Callback<()>);

pub fn use_list_refresh() -> Option<Callback<()>> {
    use_context::<ListRefresh>().map(|r| r.0)
}

#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Closed,
    Create,
    Edit(String),
}

/// Numbers collection loads so that only the latest one lands. Pushes and
/// poll ticks can overlap; an older response must not replace a newer one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LoadSequence {
    latest: u64,
}

impl LoadSequence {
    fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn ResourceList<R>(
    page_id: &'static str,
    #[prop(into)] title: String,
    columns: Vec<Column<R>>,
    #[prop(optional)] initial_sort: Option<(&'static str, SortDirection)>,
    /// Subscribe to live updates of the collection.
    #[prop(optional)]
    live: bool,
    #[prop(optional, default = true)] allow_create: bool,
    #[prop(optional, default = true)] allow_edit: bool,
    #[prop(optional, default = true)] allow_delete: bool,
    #[prop(optional)] toggle_labels: Option<(&'static str, &'static str)>,
    #[prop(optional, into)] search_placeholder: Option<String>,
    /// Rendered between the header and the table, inside the list context.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView
where
    R: Resource + PartialEq + Send + Sync + 'static,
    R::Draft: 'static,
{
    let toaster = use_toaster();
    let table_config = use_config().with_untracked(|c| c.table.clone());

    let items: RwSignal<Vec<R>> = RwSignal::new(Vec::new());
    let query = RwSignal::new(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let filtered = Signal::derive(move || query.with(|q| items.with(|all| filter_items(all, q))));
    let mut model = TableViewModel::new(table_config.pagination_options());
    if let Some((key, direction)) = initial_sort {
        model = model.with_sort(key, direction);
    }
    let table = use_table_view_from(filtered, model);

    let sequence = StoredValue::new(LoadSequence::default());
    let load = move || {
        let ticket = sequence
            .try_update_value(|s| s.begin())
            .unwrap_or_default();
        set_loading.set(true);
        spawn_local(async move {
            let result = crud_api::fetch_all::<R>().await;
            if !sequence.try_with_value(|s| s.is_current(ticket)).unwrap_or(false) {
                log::debug!("dropped stale {} load #{}", R::COLLECTION, ticket);
                return;
            }
            match result {
                Ok(data) => {
                    items.set(data);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load {}: {}", R::COLLECTION, e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };
    provide_context(ListRefresh(Callback::new(move |_| load())));

    let live_source = live.then(|| use_live_collection(R::COLLECTION, move |_| load()));

    // form state
    let editor = RwSignal::new(Editor::Closed);
    let fields = RwSignal::new(FormFields::new());
    let errors = RwSignal::new(ValidationErrors::default());
    let (saving, set_saving) = signal(false);

    let open_create = move || {
        fields.set(FormFields::new());
        errors.set(ValidationErrors::default());
        editor.set(Editor::Create);
    };

    let open_edit = Callback::new(move |record: R| {
        fields.set(record.to_draft().to_form());
        errors.set(ValidationErrors::default());
        editor.set(Editor::Edit(record.id().to_string()));
    });

    let close_editor = Callback::new(move |_| editor.set(Editor::Closed));

    let submit = Callback::new(move |_| {
        let draft = match R::Draft::from_form(&fields.get_untracked()) {
            Ok(draft) => draft,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(ValidationErrors::default());
        let mode = editor.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let result = match &mode {
                Editor::Edit(id) => crud_api::update::<R>(id, &draft).await,
                _ => crud_api::create::<R>(&draft).await,
            };
            set_saving.set(false);
            match result {
                Ok(()) => {
                    let verb = if mode == Editor::Create { "created" } else { "updated" };
                    toaster.success(format!("{} {}", R::TITLE, verb));
                    editor.set(Editor::Closed);
                    load();
                }
                Err(e) => toaster.error(e),
            }
        });
    });

    let delete = Callback::new(move |record: R| {
        if !confirm(&format!("Delete this {}?", R::TITLE.to_lowercase())) {
            return;
        }
        let id = record.id().to_string();
        spawn_local(async move {
            match crud_api::remove::<R>(&id).await {
                Ok(()) => {
                    toaster.success(format!("{} deleted", R::TITLE));
                    load();
                }
                Err(e) => toaster.error(e),
            }
        });
    });

    let toggle = Callback::new(move |record: R| {
        let id = record.id().to_string();
        spawn_local(async move {
            match crud_api::toggle_status::<R>(&id).await {
                Ok(()) => {
                    toaster.success(format!("{} status changed", R::TITLE));
                    load();
                }
                Err(e) => toaster.error(e),
            }
        });
    });

    load();

    let modal_title = move || match editor.get() {
        Editor::Edit(_) => format!("Edit {}", R::TITLE.to_lowercase()),
        _ => format!("New {}", R::TITLE.to_lowercase()),
    };
    let page_size_options = table_config.page_size_choices();

    view! {
        <PageFrame page_id=page_id>
            <PageHeader
                title=title
                aside=Box::new(move || view! {
                    <Badge>{move || table.total_rows().get().to_string()}</Badge>
                    {live_source.map(|source| view! {
                        <span class="live-indicator">
                            {move || source.get().map(|s| s.label()).unwrap_or("")}
                        </span>
                    })}
                }.into_any())
                actions=Box::new(move || view! {
                    <Show when=move || allow_create>
                        <button class="button button--primary" on:click=move |_| open_create()>
                            {icon("plus")}
                            " New"
                        </button>
                    </Show>
                    <button class="button button--secondary" on:click=move |_| load() disabled=move || loading.get()>
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </button>
                }.into_any())
            />

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {children.map(|children| children())}

                <div class="filter-panel">
                    <SearchInput
                        value=query
                        on_change=Callback::new(move |q: String| query.set(q))
                        placeholder=search_placeholder.clone().unwrap_or_default()
                    />
                    <PaginationControls
                        current_page=table.current_page()
                        total_pages=table.total_pages()
                        total_count=table.total_rows()
                        page_size=table.rows_per_page()
                        on_page_change=Callback::new(move |page: usize| table.handle_page_change(page))
                        on_page_size_change=Callback::new(move |size: usize| table.handle_rows_per_page_change(size))
                        page_size_options=page_size_options
                    />
                </div>

                <EntityTable
                    table=table
                    columns=columns
                    on_edit=allow_edit.then_some(open_edit)
                    on_delete=allow_delete.then_some(delete)
                    on_toggle=R::supports_status_toggle().then_some(toggle)
                    toggle_labels=toggle_labels
                />
            </div>

            <Show when=move || editor.with(|e| *e != Editor::Closed)>
                <FormModal
                    title=modal_title()
                    schema=R::Draft::schema()
                    fields=fields
                    errors=errors
                    saving=saving
                    on_submit=submit
                    on_cancel=close_editor
                />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_load_is_current() {
        let mut sequence = LoadSequence::default();
        let first = sequence.begin();
        let second = sequence.begin();
        // second resolves first, then the older response arrives
        assert!(sequence.is_current(second));
        assert!(!sequence.is_current(first));

        let third = sequence.begin();
        assert!(!sequence.is_current(second));
        assert!(sequence.is_current(third));
    }
}
