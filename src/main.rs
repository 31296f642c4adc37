use dioxus::logger::tracing::Level;

use botpanel::App;

fn main() {
    dioxus::logger::init(Level::WARN).unwrap();
    dioxus::launch(App);
}
