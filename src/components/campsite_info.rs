/// Top-level campsite view: breadcrumb, heading, card and comment thread,
/// or the loading/error state in their place.
use leptos::*;
use leptos_router::A;
use crate::components::{
    campsite_card::CampsiteCard, comment_list::CommentList, loading::Loading,
};
use crate::models::campsite::Campsite;
use crate::models::comment::{Comment, NewComment};

/// Which of the mutually exclusive renderings applies.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    Loading,
    Error(String),
    Campsite(Campsite),
    Empty,
}

impl DisplayState {
    /// Loading wins over an error, an error wins over content.
    /// An empty error message counts as no error.
    pub fn select(is_loading: bool, err_mess: Option<String>, campsite: Option<Campsite>) -> Self {
        if is_loading {
            return DisplayState::Loading;
        }
        match (err_mess.filter(|m| !m.is_empty()), campsite) {
            (Some(message), _) => DisplayState::Error(message),
            (None, Some(campsite)) => DisplayState::Campsite(campsite),
            (None, None) => DisplayState::Empty,
        }
    }
}

#[component]
pub fn CampsiteInfo(
    #[prop(into)] is_loading: MaybeSignal<bool>,
    #[prop(into)] err_mess: MaybeSignal<Option<String>>,
    #[prop(into)] campsite: MaybeSignal<Option<Campsite>>,
    #[prop(into)] comments: MaybeSignal<Vec<Comment>>,
    add_comment: Callback<NewComment>,
) -> impl IntoView {
    move || match DisplayState::select(is_loading.get(), err_mess.get(), campsite.get()) {
        DisplayState::Loading => view! {
            <div class="container">
                <div class="row">
                    <Loading />
                </div>
            </div>
        }
        .into_view(),
        DisplayState::Error(message) => view! {
            <div class="container">
                <div class="row">
                    <div class="col">
                        <h4>{ message }</h4>
                    </div>
                </div>
            </div>
        }
        .into_view(),
        DisplayState::Campsite(campsite) => {
            let campsite_id = campsite.id;
            let name = campsite.name.clone();
            view! {
                <div class="container">
                    <div class="row">
                        <div class="col">
                            <nav aria-label="breadcrumb">
                                <ol class="breadcrumb">
                                    <li class="breadcrumb-item">
                                        <A href="/directory">"Directory"</A>
                                    </li>
                                    <li class="breadcrumb-item active" aria-current="page">
                                        { name.clone() }
                                    </li>
                                </ol>
                            </nav>
                            <h2>{ name }</h2>
                            <hr />
                        </div>
                    </div>
                    <div class="row">
                        <CampsiteCard campsite=campsite />
                        <CommentList
                            comments=comments.clone()
                            campsite_id=campsite_id
                            add_comment=add_comment
                        />
                    </div>
                </div>
            }
            .into_view()
        }
        DisplayState::Empty => view! { <div></div> }.into_view(),
    }
}
