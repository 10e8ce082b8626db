//! Menu Cart - browser entry point.

use menu_cart::app::App;

fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();

    tracing::info!(
        "Starting Menu Cart v{} ({})",
        env!("MENU_CART_VERSION"),
        env!("MENU_CART_GIT_SHA")
    );

    dioxus::launch(App);
}
