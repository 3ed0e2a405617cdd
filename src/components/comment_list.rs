use leptos::*;
use crate::components::comment_form::CommentForm;
use crate::models::comment::{Comment, NewComment};

/// Comments for one campsite in the order given, followed by the comment form.
#[component]
pub fn CommentList(
    #[prop(into)] comments: MaybeSignal<Vec<Comment>>,
    campsite_id: u32,
    add_comment: Callback<NewComment>,
) -> impl IntoView {
    view! {
        <div class="col-md-5 m-1">
            <h4>{ "Comments" }</h4>
            <For
                each=move || comments.get()
                key=|comment| comment.id
                children=move |comment| view! { <CommentEntry comment=comment /> }
            />
            <CommentForm campsite_id=campsite_id add_comment=add_comment />
        </div>
    }
}

#[component]
fn CommentEntry(comment: Comment) -> impl IntoView {
    let byline = format!("-- {}, {}", comment.author, comment.display_date());

    view! {
        <div class="comment">
            <p>{ comment.text }</p>
            {comment.rating.map(|rating| view! {
                <p class="comment-rating">{ format!("Rating: {}/5", rating) }</p>
            })}
            <p>{ byline }</p>
        </div>
    }
}
