//! Cities panel.

use leptos::prelude::*;
use listhub_domain::city::{City, CityForm};
use listhub_domain::id::CityId;

use crate::actions::PanelHandle;
use crate::components::{CityTable, Loading, SearchBox, use_toasts};
use crate::dialogs::WebDialogs;
use crate::use_api;

/// Create form, search box and table for cities.
#[component]
pub fn Cities() -> impl IntoView {
    let api = use_api();
    let cities = PanelHandle::<City>::new(use_toasts());
    let loaded = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());

    let list_api = api.clone();
    cities.load(async move { list_api.list::<City>(&()).await }, loaded);

    let create_api = api.clone();
    let create = move |_| {
        let form = CityForm {
            name: name.get_untracked(),
            state: state.get_untracked(),
        };
        let api = create_api.clone();
        cities.mutate(
            "City created",
            async move { api.create::<City>(form, &()).await.map(Some) },
            move || {
                name.set(String::new());
                state.set(String::new());
            },
        );
    };

    let edit_api = api.clone();
    let on_edit = Callback::new(move |city: City| {
        let api = edit_api.clone();
        cities.mutate(
            "City updated",
            async move { api.edit(&WebDialogs, &city, &()).await },
            || {},
        );
    });

    let on_delete = Callback::new(move |id: CityId| {
        let api = api.clone();
        cities.mutate(
            "City deleted",
            async move { api.delete::<City, _>(&WebDialogs, id, &()).await },
            || {},
        );
    });

    view! {
        <div>
            <h2>"Cities"</h2>
            <section class="card">
                <h3>"New city"</h3>
                <div class="form-row">
                    <input
                        placeholder="City name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        placeholder="State (e.g. SP)"
                        prop:value=move || state.get()
                        on:input=move |ev| state.set(event_target_value(&ev))
                    />
                </div>
                <button class="btn-primary" on:click=create>"Create city"</button>
            </section>
            <section class="card">
                <h3>"City list"</h3>
                <SearchBox
                    placeholder="Search cities…"
                    value=Signal::derive(move || cities.search())
                    on_input=move |raw: String| cities.set_search(raw)
                />
                {move || {
                    if loaded.get() {
                        view! {
                            <CityTable cities=cities.visible() on_edit on_delete/>
                        }
                        .into_any()
                    } else {
                        view! { <Loading what="cities"/> }.into_any()
                    }
                }}
            </section>
        </div>
    }
}
