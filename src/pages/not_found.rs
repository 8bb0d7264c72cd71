use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-white text-gray-800">
            <h1 class="text-6xl font-extrabold text-blue-800">{"404"}</h1>
            <p class="mt-4 text-lg text-gray-600">{"页面不存在 | PAGE NOT FOUND"}</p>
            <Link<Route> to={Route::Home} classes="mt-8 px-6 py-2 rounded-full bg-blue-700 text-white hover:opacity-90">
                {"返回首页"}
            </Link<Route>>
        </div>
    }
}
