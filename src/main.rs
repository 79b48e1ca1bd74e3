mod components;
mod debounce;
mod state;

use components::app::App;

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("error initializing logger");
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
