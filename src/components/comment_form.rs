use leptos::ev::SubmitEvent;
use leptos::logging::{log, warn};
use leptos::*;

use crate::components::modal::Modal;
use crate::models::comment::{NewComment, Rating};
use crate::validation::CommentDraft;

/// "Submit Comment" button plus the modal holding the comment fields.
/// A valid submission is handed to `add_comment` once and closes the modal.
#[component]
pub fn CommentForm(campsite_id: u32, add_comment: Callback<NewComment>) -> impl IntoView {
    let (is_modal_open, set_modal_open) = create_signal(false);

    let toggle_modal = Callback::new(move |_: ()| {
        set_modal_open.update(|open| *open = !*open);
    });

    let handle_comment = Callback::new(move |new_comment: NewComment| {
        add_comment.call(new_comment);
        toggle_modal.call(());
    });

    view! {
        <button
            type="button"
            class="btn btn-outline-secondary"
            on:click=move |_| toggle_modal.call(())
        >
            <i class="fa fa-lg fa-pencil"></i>
            " Submit Comment"
        </button>
        <Modal is_open=is_modal_open on_toggle=toggle_modal title="Submit Comment">
            <CommentFields campsite_id=campsite_id on_submit=handle_comment />
        </Modal>
    }
}

// Rebuilt every time the modal opens, so each open starts from an empty draft.
#[component]
fn CommentFields(campsite_id: u32, on_submit: Callback<NewComment>) -> impl IntoView {
    let draft = create_rw_signal(CommentDraft::default());
    let (author_touched, set_author_touched) = create_signal(false);

    let author_error = move || {
        if author_touched.get() {
            draft.with(|d| d.author_error())
        } else {
            None
        }
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match draft.get_untracked().into_new_comment(campsite_id) {
            Ok(new_comment) => {
                log!("[COMMENT] Submitting comment for campsite {}", campsite_id);
                on_submit.call(new_comment);
            }
            Err(err) => {
                warn!("[COMMENT] Submission blocked: {}", err);
                set_author_touched.set(true);
            }
        }
    };

    view! {
        <form on:submit=handle_submit>
            <div class="form-group">
                <label for="rating">"Rating"</label>
                <select
                    class="form-control"
                    id="rating"
                    name="rating"
                    on:change=move |ev| {
                        let rating = event_target_value(&ev).parse::<Rating>().ok();
                        draft.update(|d| d.rating = rating);
                    }
                >
                    <option value="">"Select..."</option>
                    {Rating::all()
                        .map(|rating| view! {
                            <option value=rating.to_string()>{ rating.to_string() }</option>
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="author">"Your Name"</label>
                <input
                    type="text"
                    class=move || {
                        if author_error().is_some() { "form-control is-invalid" } else { "form-control" }
                    }
                    id="author"
                    name="author"
                    placeholder="Your Name"
                    prop:value=move || draft.with(|d| d.author.clone())
                    on:input=move |ev| {
                        let author = event_target_value(&ev);
                        draft.update(|d| d.author = author);
                    }
                    on:blur=move |_| set_author_touched.set(true)
                />
                {move || author_error().map(|err| view! {
                    <div class="text-danger">{ err.to_string() }</div>
                })}
            </div>

            <div class="form-group">
                <label for="text">"Comment"</label>
                <textarea
                    class="form-control"
                    id="text"
                    name="text"
                    rows="6"
                    prop:value=move || draft.with(|d| d.text.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        draft.update(|d| d.text = text);
                    }
                ></textarea>
            </div>

            <button type="submit" class="btn btn-primary" value="submit">"Submit"</button>
        </form>
    }
}
