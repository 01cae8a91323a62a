use leptos::prelude::*;
use listhub_domain::category::Category;
use listhub_domain::id::CategoryId;

#[component]
pub fn CategoryTable(
    categories: Vec<Category>,
    #[prop(into)] on_edit: Callback<Category>,
    #[prop(into)] on_delete: Callback<CategoryId>,
) -> impl IntoView {
    if categories.is_empty() {
        return view! { <p>"No categories found."</p> }.into_any();
    }

    view! {
        <table>
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {categories
                    .into_iter()
                    .map(|category| {
                        let id = category.id;
                        let name = category.name.clone();
                        view! {
                            <tr>
                                <td>{id.to_string()}</td>
                                <td>{name}</td>
                                <td class="actions">
                                    <button
                                        class="btn-secondary"
                                        on:click=move |_| on_edit.run(category.clone())
                                    >
                                        "Edit"
                                    </button>
                                    <button class="btn-danger" on:click=move |_| on_delete.run(id)>
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
