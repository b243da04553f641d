use yew::prelude::*;

use forzeo_web::pages::landing::Landing;

#[function_component(App)]
fn app() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
