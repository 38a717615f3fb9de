use crate::app::App;

mod app;
mod components;
mod form_grid;

fn main() {
    yew::Renderer::<App>::new().render();
}
