//! Toast notifications confirming successful operations.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen.
const TOAST_TTL_MS: u32 = 3000;

/// A single toast message.
#[derive(Debug, Clone)]
pub struct ToastMessage {
    /// Unique id for keyed rendering.
    pub id: u32,
    /// The message body to display.
    pub text: String,
}

/// Reactive context providing toast mutation methods.
#[derive(Clone, Copy)]
pub struct ToastProvider {
    set_toasts: WriteSignal<Vec<ToastMessage>>,
    next_id: RwSignal<u32>,
}

impl ToastProvider {
    /// Push a new toast. It auto-dismisses after a few seconds.
    pub fn push(&self, text: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));

        let text = text.into();
        self.set_toasts.update(|list| {
            list.push(ToastMessage { id, text });
        });

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
            set_toasts.update(|list| {
                list.retain(|t| t.id != id);
            });
        });
    }

    /// Dismiss a toast immediately by id.
    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|list| {
            list.retain(|t| t.id != id);
        });
    }
}

/// Access the toast provider from Leptos context.
///
/// Must be called within a component tree that has a [`ToastContainer`] ancestor.
pub fn use_toasts() -> ToastProvider {
    use_context::<ToastProvider>().expect("ToastProvider not found in context")
}

/// Container component that provides toast context and renders active toasts.
#[component]
pub fn ToastContainer(children: Children) -> impl IntoView {
    let (toasts, set_toasts) = signal(Vec::<ToastMessage>::new());
    let provider = ToastProvider {
        set_toasts,
        next_id: RwSignal::new(0),
    };
    provide_context(provider);

    view! {
        {children()}
        <div class="toast-container">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast toast-success">
                            <button class="toast-dismiss" on:click=move |_| provider.dismiss(id)>
                                "\u{00D7}"
                            </button>
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
