pub mod audio;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{
   games::FrontendLuckGame,
   not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Game,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Game => html! { <FrontendLuckGame /> },
       Route::NotFound => html! { <NotFound /> },
   }
}
