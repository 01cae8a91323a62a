//! User table component.

use leptos::prelude::*;
use listhub_app::resource::WithAsset;
use listhub_domain::id::UserId;
use listhub_domain::user::User;

/// A table displaying users and their avatars.
#[component]
pub fn UserTable(
    users: Vec<User>,
    #[prop(into)] on_edit: Callback<User>,
    #[prop(into)] on_delete: Callback<UserId>,
    /// Pre-fills the avatar upload card with the row's id.
    #[prop(into)]
    on_pick_avatar: Callback<UserId>,
    #[prop(into)] on_remove_avatar: Callback<UserId>,
) -> impl IntoView {
    if users.is_empty() {
        view! {
            <p>"No users found."</p>
        }
        .into_any()
    } else {
        view! {
            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Avatar"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {users.into_iter().map(|user| {
                        view! {
                            <UserRow user on_edit on_delete on_pick_avatar on_remove_avatar/>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    }
}

#[component]
fn UserRow(
    user: User,
    on_edit: Callback<User>,
    on_delete: Callback<UserId>,
    on_pick_avatar: Callback<UserId>,
    on_remove_avatar: Callback<UserId>,
) -> impl IntoView {
    let id = user.id;
    let name = user.name.clone();
    let email = user.email.clone();
    let asset_url = user.asset_url().map(str::to_string);
    let has_avatar = asset_url.is_some();
    let avatar = asset_url.map_or_else(
        || view! { {User::missing_asset()} }.into_any(),
        |url| view! { <img class="thumb avatar" src=url alt="avatar"/> }.into_any(),
    );

    view! {
        <tr>
            <td>{id.to_string()}</td>
            <td>{name}</td>
            <td>{email}</td>
            <td>{avatar}</td>
            <td class="actions">
                <button class="btn-secondary" on:click=move |_| on_edit.run(user.clone())>
                    "Edit"
                </button>
                <button class="btn-secondary" on:click=move |_| on_pick_avatar.run(id)>
                    "Avatar"
                </button>
                {has_avatar.then(|| view! {
                    <button class="btn-danger" on:click=move |_| on_remove_avatar.run(id)>
                        "Remove avatar"
                    </button>
                })}
                <button class="btn-danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
