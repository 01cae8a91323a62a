//! Services panel: create form, logo upload, filters and the service list.
//!
//! Cities and categories are fetched alongside the services so the create
//! form and the filters can offer them as choices. The active filter is kept
//! for every refresh that follows a mutation.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use listhub_domain::category::Category;
use listhub_domain::city::City;
use listhub_domain::id::ServiceId;
use listhub_domain::service::{Service, ServiceForm, ServiceQuery};

use crate::actions::{PanelHandle, report};
use crate::components::{AssetUpload, Loading, SearchBox, ServiceTable, use_toasts};
use crate::dialogs::WebDialogs;
use crate::use_api;

#[component]
pub fn Services() -> impl IntoView {
    let api = use_api();
    let services = PanelHandle::<Service>::new(use_toasts());
    let cities = RwSignal::new(Vec::<City>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let loaded = RwSignal::new(false);

    // Create form
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category_id = RwSignal::new(String::new());
    let city_id = RwSignal::new(String::new());

    // Filters
    let filter_category = RwSignal::new(String::new());
    let filter_city = RwSignal::new(String::new());

    // Logo upload
    let logo_target = RwSignal::new(String::new());
    let logo_input = NodeRef::<Input>::new();

    let view_api = api.clone();
    spawn_local(async move {
        match view_api.load_service_view(&ServiceQuery::default()).await {
            Ok(view) => {
                cities.try_set(view.cities);
                categories.try_set(view.categories);
                services.replace(view.services);
            }
            Err(err) => report(&err),
        }
        loaded.try_set(true);
    });

    let create_api = api.clone();
    let create = move |_| {
        let form = ServiceForm {
            name: name.get_untracked(),
            description: description.get_untracked(),
            category_id: category_id.get_untracked(),
            city_id: city_id.get_untracked(),
        };
        let query = services.query();
        let api = create_api.clone();
        services.mutate(
            "Service created",
            async move { api.create::<Service>(form, &query).await.map(Some) },
            move || {
                name.set(String::new());
                description.set(String::new());
                category_id.set(String::new());
                city_id.set(String::new());
            },
        );
    };

    let upload_api = api.clone();
    let on_upload = Callback::new(move |()| {
        let target = logo_target.get_untracked();
        let file = logo_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let query = services.query();
        let api = upload_api.clone();
        services.mutate(
            "Logo uploaded",
            async move {
                api.upload_asset::<Service>(&target, file, &query)
                    .await
                    .map(Some)
            },
            move || {
                logo_target.set(String::new());
                if let Some(input) = logo_input.get_untracked() {
                    input.set_value("");
                }
            },
        );
    });

    let filter_api = api.clone();
    let filter = move |_| {
        let query = match ServiceQuery::from_selects(
            &filter_category.get_untracked(),
            &filter_city.get_untracked(),
        ) {
            Ok(query) => query,
            Err(err) => return report(&err.into()),
        };
        let api = filter_api.clone();
        services.relist(
            query,
            async move { api.list::<Service>(&query).await },
            || {},
        );
    };

    let clear_api = api.clone();
    let clear = move |_| {
        let api = clear_api.clone();
        services.relist(
            ServiceQuery::default(),
            async move { api.list::<Service>(&ServiceQuery::default()).await },
            move || {
                filter_category.set(String::new());
                filter_city.set(String::new());
            },
        );
    };

    let edit_api = api.clone();
    let on_edit = Callback::new(move |service: Service| {
        let query = services.query();
        let api = edit_api.clone();
        services.mutate(
            "Service updated",
            async move { api.edit(&WebDialogs, &service, &query).await },
            || {},
        );
    });

    let delete_api = api.clone();
    let on_delete = Callback::new(move |id: ServiceId| {
        let query = services.query();
        let api = delete_api.clone();
        services.mutate(
            "Service deleted",
            async move { api.delete::<Service, _>(&WebDialogs, id, &query).await },
            || {},
        );
    });

    let on_pick_logo = Callback::new(move |id: ServiceId| logo_target.set(id.to_string()));

    let on_remove_logo = Callback::new(move |id: ServiceId| {
        let query = services.query();
        let api = api.clone();
        services.mutate(
            "Logo removed",
            async move {
                api.remove_asset::<Service, _>(&WebDialogs, id, &query)
                    .await
            },
            || {},
        );
    });

    let category_options = move || {
        categories
            .get()
            .into_iter()
            .map(|category| {
                view! { <option value=category.id.to_string()>{category.name}</option> }
            })
            .collect_view()
    };
    let city_options = move || {
        cities
            .get()
            .into_iter()
            .map(|city| view! { <option value=city.id.to_string()>{city.label()}</option> })
            .collect_view()
    };

    view! {
        <div>
            <h2>"Services"</h2>
            <section class="card">
                <h3>"New service"</h3>
                <div class="form-row">
                    <input
                        placeholder="Service name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-row">
                    <select
                        prop:value=move || category_id.get()
                        on:change=move |ev| category_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select category"</option>
                        {category_options}
                    </select>
                    <select
                        prop:value=move || city_id.get()
                        on:change=move |ev| city_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select city"</option>
                        {city_options}
                    </select>
                </div>
                <button class="btn-primary" on:click=create>"Create service"</button>
            </section>
            <AssetUpload
                title="Upload logo"
                id_placeholder="Service ID"
                target=logo_target
                file_input=logo_input
                on_upload
            />
            <section class="card">
                <h3>"Filter services"</h3>
                <div class="form-row">
                    <label>
                        "Category "
                        <select
                            prop:value=move || filter_category.get()
                            on:change=move |ev| filter_category.set(event_target_value(&ev))
                        >
                            <option value="">"All"</option>
                            {category_options}
                        </select>
                    </label>
                    <label>
                        "City "
                        <select
                            prop:value=move || filter_city.get()
                            on:change=move |ev| filter_city.set(event_target_value(&ev))
                        >
                            <option value="">"All"</option>
                            {city_options}
                        </select>
                    </label>
                    <button class="btn-secondary" on:click=filter>"Filter"</button>
                    <button class="btn-secondary" on:click=clear>"Clear"</button>
                </div>
            </section>
            <section class="card">
                <h3>"Service list"</h3>
                <SearchBox
                    placeholder="Search services…"
                    value=Signal::derive(move || services.search())
                    on_input=move |raw: String| services.set_search(raw)
                />
                {move || {
                    if loaded.get() {
                        view! {
                            <ServiceTable
                                services=services.visible()
                                on_edit
                                on_delete
                                on_pick_logo
                                on_remove_logo
                            />
                        }
                        .into_any()
                    } else {
                        view! { <Loading what="services"/> }.into_any()
                    }
                }}
            </section>
        </div>
    }
}
