pub mod base;
pub mod events;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod scheduler;
pub mod storage;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{dashboard::Dashboard, wheel::WheelPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Home,
   #[at("/stats")] Stats,
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
       Route::Home | Route::NotFound => html! { <WheelPage /> },
       Route::Stats => html! { <Dashboard /> },
   }
}
