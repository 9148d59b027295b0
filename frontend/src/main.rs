use crate::app::App;

mod api;
mod app;
mod components;
mod helpers;
mod logger;
mod seams;

fn main() {
    logger::init(log::LevelFilter::Debug);
    yew::Renderer::<App>::new().render();
}
