use listhub_dashboard::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "listhub dashboard starting");
    leptos::mount::mount_to_body(App);
}
