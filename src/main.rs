mod app;
mod challenge;
mod components;
mod event;

fn main() {
    dioxus::logger::initialize_default();

    eprintln!("{}", env!("BANNER").replace(r"\n", "\n").trim_matches('"')); // had to be escaped, see build.rs

    dioxus::launch(app::App);
}
