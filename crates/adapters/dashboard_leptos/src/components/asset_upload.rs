//! Upload card for record images (service logos, user avatars).

use leptos::html::Input;
use leptos::prelude::*;

/// Target-id field, file picker and upload button.
///
/// Row buttons pre-fill `target`; the page reads the picked file through
/// `file_input` when `on_upload` fires.
#[component]
pub fn AssetUpload(
    title: &'static str,
    id_placeholder: &'static str,
    target: RwSignal<String>,
    file_input: NodeRef<Input>,
    #[prop(into)] on_upload: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="card">
            <h3>{title}</h3>
            <div class="form-row">
                <input
                    type="text"
                    placeholder=id_placeholder
                    prop:value=move || target.get()
                    on:input=move |ev| target.set(event_target_value(&ev))
                />
                <input type="file" accept="image/*" node_ref=file_input/>
            </div>
            <button class="btn-primary" on:click=move |_| on_upload.run(())>
                "Upload"
            </button>
        </section>
    }
}
