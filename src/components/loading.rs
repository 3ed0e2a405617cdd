use leptos::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="col">
            <span class="fa fa-spinner fa-pulse fa-3x fa-fw text-primary"></span>
            <h4>"Loading..."</h4>
        </div>
    }
}
