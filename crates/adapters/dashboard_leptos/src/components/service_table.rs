//! Service table component.

use leptos::prelude::*;
use listhub_app::resource::WithAsset;
use listhub_domain::id::ServiceId;
use listhub_domain::service::Service;

/// A table displaying services with their joined category and city.
#[component]
pub fn ServiceTable(
    /// Rows to display, already narrowed by the search box.
    services: Vec<Service>,
    #[prop(into)] on_edit: Callback<Service>,
    #[prop(into)] on_delete: Callback<ServiceId>,
    /// Pre-fills the logo upload card with the row's id.
    #[prop(into)]
    on_pick_logo: Callback<ServiceId>,
    #[prop(into)] on_remove_logo: Callback<ServiceId>,
) -> impl IntoView {
    if services.is_empty() {
        view! {
            <p>"No services found."</p>
        }
        .into_any()
    } else {
        view! {
            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Category"</th>
                        <th>"City"</th>
                        <th>"Logo"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {services.into_iter().map(|service| {
                        view! {
                            <ServiceRow service on_edit on_delete on_pick_logo on_remove_logo/>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    }
}

/// A single row in the service table.
#[component]
fn ServiceRow(
    service: Service,
    on_edit: Callback<Service>,
    on_delete: Callback<ServiceId>,
    on_pick_logo: Callback<ServiceId>,
    on_remove_logo: Callback<ServiceId>,
) -> impl IntoView {
    let id = service.id;
    let name = service.name.clone();
    let description = service.description_cell().to_string();
    let category = service.category_cell().to_string();
    let city = service.city_cell();
    let asset_url = service.asset_url().map(str::to_string);
    let has_logo = asset_url.is_some();
    let logo = asset_url.map_or_else(
        || view! { {Service::missing_asset()} }.into_any(),
        |url| view! { <img class="thumb" src=url alt="logo"/> }.into_any(),
    );

    view! {
        <tr>
            <td>{id.to_string()}</td>
            <td>{name}</td>
            <td>{description}</td>
            <td>{category}</td>
            <td>{city}</td>
            <td>{logo}</td>
            <td class="actions">
                <button class="btn-secondary" on:click=move |_| on_edit.run(service.clone())>
                    "Edit"
                </button>
                <button class="btn-secondary" on:click=move |_| on_pick_logo.run(id)>
                    "Logo"
                </button>
                {has_logo.then(|| view! {
                    <button class="btn-danger" on:click=move |_| on_remove_logo.run(id)>
                        "Remove logo"
                    </button>
                })}
                <button class="btn-danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
