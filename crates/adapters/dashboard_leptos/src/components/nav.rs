use leptos::prelude::*;
use leptos_router::components::A;
use listhub_app::navigation::Tab;

/// Tab bar. The router marks the link of the current page with
/// `aria-current="page"`.
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <ul>
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <li>
                                <A href=tab.path()>
                                    {tab.label()}
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
