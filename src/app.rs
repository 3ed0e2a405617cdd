/// Application shell: provides configuration and the campsite store,
/// and routes between the directory and a single campsite.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::{campsite_info::CampsiteInfo, directory::Directory};
use crate::config::{provide_app_config, AppConfig};
use crate::data::load_seed;
use crate::models::comment::NewComment;
use crate::store::{provide_campsite_store, use_campsite_store, CampsiteStore};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_app_config(AppConfig::default());

    let store = CampsiteStore::new();
    store.load(load_seed());
    provide_campsite_store(store);

    view! {
        <Stylesheet id="leptos" href="/pkg/campsite_info.css" />
        <Title text="Campsite Info" />
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path="/directory" /> } />
                    <Route path="/directory" view=Directory />
                    <Route path="/directory/:campsite_id" view=CampsiteInfoPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Wires `CampsiteInfo` to the store for the campsite named in the URL.
#[component]
fn CampsiteInfoPage() -> impl IntoView {
    let store = use_campsite_store();
    let params = use_params_map();

    let campsite_id = move || {
        params.with(|p| p.get("campsite_id").and_then(|id| id.parse::<u32>().ok()))
    };
    let campsite = Signal::derive(move || campsite_id().and_then(|id| store.campsite(id)));
    let comments = Signal::derive(move || {
        campsite_id()
            .map(|id| store.comments_for(id))
            .unwrap_or_default()
    });
    let add_comment = Callback::new(move |new_comment: NewComment| store.add_comment(new_comment));

    view! {
        <CampsiteInfo
            is_loading=store.is_loading
            err_mess=store.err_mess
            campsite=campsite
            comments=comments
            add_comment=add_comment
        />
    }
}
