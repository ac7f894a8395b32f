mod app;
mod casing;
mod chord;
mod editor_core;
mod markup;
mod sections;

use app::App;
use leptos::mount::mount_to_body;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
