//! Users panel with avatar upload.

use leptos::html::Input;
use leptos::prelude::*;
use listhub_domain::id::UserId;
use listhub_domain::user::{User, UserForm};

use crate::actions::PanelHandle;
use crate::components::{AssetUpload, Loading, SearchBox, UserTable, use_toasts};
use crate::dialogs::WebDialogs;
use crate::use_api;

#[component]
pub fn Users() -> impl IntoView {
    let api = use_api();
    let users = PanelHandle::<User>::new(use_toasts());
    let loaded = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let avatar_target = RwSignal::new(String::new());
    let avatar_input = NodeRef::<Input>::new();

    let list_api = api.clone();
    users.load(async move { list_api.list::<User>(&()).await }, loaded);

    let create_api = api.clone();
    let create = move |_| {
        let form = UserForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
        };
        let api = create_api.clone();
        users.mutate(
            "User created",
            async move { api.create::<User>(form, &()).await.map(Some) },
            move || {
                name.set(String::new());
                email.set(String::new());
            },
        );
    };

    let upload_api = api.clone();
    let on_upload = Callback::new(move |()| {
        let target = avatar_target.get_untracked();
        let file = avatar_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let api = upload_api.clone();
        users.mutate(
            "Avatar uploaded",
            async move { api.upload_asset::<User>(&target, file, &()).await.map(Some) },
            move || {
                avatar_target.set(String::new());
                if let Some(input) = avatar_input.get_untracked() {
                    input.set_value("");
                }
            },
        );
    });

    let edit_api = api.clone();
    let on_edit = Callback::new(move |user: User| {
        let api = edit_api.clone();
        users.mutate(
            "User updated",
            async move { api.edit(&WebDialogs, &user, &()).await },
            || {},
        );
    });

    let delete_api = api.clone();
    let on_delete = Callback::new(move |id: UserId| {
        let api = delete_api.clone();
        users.mutate(
            "User deleted",
            async move { api.delete::<User, _>(&WebDialogs, id, &()).await },
            || {},
        );
    });

    let on_pick_avatar = Callback::new(move |id: UserId| avatar_target.set(id.to_string()));

    let on_remove_avatar = Callback::new(move |id: UserId| {
        let api = api.clone();
        users.mutate(
            "Avatar removed",
            async move { api.remove_asset::<User, _>(&WebDialogs, id, &()).await },
            || {},
        );
    });

    view! {
        <div>
            <h2>"Users"</h2>
            <section class="card">
                <h3>"New user"</h3>
                <div class="form-row">
                    <input
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="email@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <button class="btn-primary" on:click=create>"Create user"</button>
            </section>
            <AssetUpload
                title="Upload avatar"
                id_placeholder="User ID"
                target=avatar_target
                file_input=avatar_input
                on_upload
            />
            <section class="card">
                <h3>"User list"</h3>
                <SearchBox
                    placeholder="Search users…"
                    value=Signal::derive(move || users.search())
                    on_input=move |raw: String| users.set_search(raw)
                />
                {move || {
                    if loaded.get() {
                        view! {
                            <UserTable
                                users=users.visible()
                                on_edit
                                on_delete
                                on_pick_avatar
                                on_remove_avatar
                            />
                        }
                        .into_any()
                    } else {
                        view! { <Loading what="users"/> }.into_any()
                    }
                }}
            </section>
        </div>
    }
}
