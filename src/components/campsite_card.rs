/// Image and description card for one campsite.
use leptos::*;
use crate::config::use_app_config;
use crate::models::campsite::Campsite;

#[component]
pub fn CampsiteCard(campsite: Campsite) -> impl IntoView {
    let config = use_app_config();
    let image_url = config.image_url(&campsite.image);

    view! {
        <div class="col-md-5 m-1">
            <div class="card">
                <img class="card-img-top" src=image_url alt=campsite.name />
                <div class="card-body">
                    <p class="card-text">{ campsite.description }</p>
                </div>
            </div>
        </div>
    }
}
