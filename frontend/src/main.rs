mod components;
mod config;
mod pages;
mod utils;

use pages::landing::Landing;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! { <Landing /> }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
