use leptos::prelude::*;
use listhub_domain::category::{Category, CategoryForm};
use listhub_domain::id::CategoryId;

use crate::actions::PanelHandle;
use crate::components::{CategoryTable, Loading, SearchBox, use_toasts};
use crate::dialogs::WebDialogs;
use crate::use_api;

/// Categories panel.
#[component]
pub fn Categories() -> impl IntoView {
    let api = use_api();
    let categories = PanelHandle::<Category>::new(use_toasts());
    let loaded = RwSignal::new(false);
    let name = RwSignal::new(String::new());

    let list_api = api.clone();
    categories.load(async move { list_api.list::<Category>(&()).await }, loaded);

    let create_api = api.clone();
    let create = move |_| {
        let form = CategoryForm {
            name: name.get_untracked(),
        };
        let api = create_api.clone();
        categories.mutate(
            "Category created",
            async move { api.create::<Category>(form, &()).await.map(Some) },
            move || name.set(String::new()),
        );
    };

    let edit_api = api.clone();
    let on_edit = Callback::new(move |category: Category| {
        let api = edit_api.clone();
        categories.mutate(
            "Category updated",
            async move { api.edit(&WebDialogs, &category, &()).await },
            || {},
        );
    });

    let on_delete = Callback::new(move |id: CategoryId| {
        let api = api.clone();
        categories.mutate(
            "Category deleted",
            async move { api.delete::<Category, _>(&WebDialogs, id, &()).await },
            || {},
        );
    });

    view! {
        <div>
            <h2>"Categories"</h2>
            <section class="card">
                <h3>"New category"</h3>
                <div class="form-row">
                    <input
                        placeholder="Category name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <button class="btn-primary" on:click=create>"Create category"</button>
            </section>
            <section class="card">
                <h3>"Category list"</h3>
                <SearchBox
                    placeholder="Search categories…"
                    value=Signal::derive(move || categories.search())
                    on_input=move |raw: String| categories.set_search(raw)
                />
                <Show
                    when=move || loaded.get()
                    fallback=|| view! { <Loading what="categories"/> }
                >
                    {move || {
                        view! {
                            <CategoryTable categories=categories.visible() on_edit on_delete/>
                        }
                    }}
                </Show>
            </section>
        </div>
    }
}
