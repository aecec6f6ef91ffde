use barbucho_leptos::app::App;

fn main() {
    console_error_panic_hook::set_once();
    barbucho_leptos::logger::init();

    leptos::mount_to_body(App)
}
