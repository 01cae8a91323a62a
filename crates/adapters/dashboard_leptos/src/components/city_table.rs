//! City table component.

use leptos::prelude::*;
use listhub_domain::city::City;
use listhub_domain::id::CityId;

/// A table displaying a list of cities.
#[component]
pub fn CityTable(
    /// Rows to display, already narrowed by the search box.
    cities: Vec<City>,
    #[prop(into)] on_edit: Callback<City>,
    #[prop(into)] on_delete: Callback<CityId>,
) -> impl IntoView {
    if cities.is_empty() {
        view! {
            <p>"No cities found."</p>
        }
        .into_any()
    } else {
        view! {
            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"State"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {cities.into_iter().map(|city| {
                        view! {
                            <CityRow city on_edit on_delete/>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    }
}

/// A single row in the city table.
#[component]
fn CityRow(city: City, on_edit: Callback<City>, on_delete: Callback<CityId>) -> impl IntoView {
    let id = city.id;
    let name = city.name.clone();
    let state = city.state.clone();

    view! {
        <tr>
            <td>{id.to_string()}</td>
            <td>{name}</td>
            <td>{state}</td>
            <td class="actions">
                <button class="btn-secondary" on:click=move |_| on_edit.run(city.clone())>
                    "Edit"
                </button>
                <button class="btn-danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
