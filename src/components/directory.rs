/// Minimal directory page: one link per campsite.
use leptos::*;
use leptos_router::A;
use crate::store::use_campsite_store;

#[component]
pub fn Directory() -> impl IntoView {
    let store = use_campsite_store();

    view! {
        <div class="container">
            <div class="row">
                <div class="col">
                    <h2>{ "Directory" }</h2>
                    <hr />
                </div>
            </div>
            <ul class="list-unstyled">
                <For
                    each=move || store.campsites.get()
                    key=|campsite| campsite.id
                    children=move |campsite| view! {
                        <li>
                            <A href=format!("/directory/{}", campsite.id)>{ campsite.name }</A>
                        </li>
                    }
                />
            </ul>
        </div>
    }
}
