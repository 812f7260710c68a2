use yew::prelude::*;
use yew_router::prelude::*;

use crate::{styles, Route};

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div class={styles::NOT_FOUND}>
            <h1 class={styles::TEXT_H1}>{"Nothing to spin here"}</h1>
            <Link<Route> to={Route::Game} classes={classes!(styles::LINK)}>{"Back to the wheel"}</Link<Route>>
        </div>
    }
}
