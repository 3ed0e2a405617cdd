#![cfg(feature = "ssr")]

use leptos::*;
use leptos_router::{Router, RouterIntegrationContext, ServerIntegration};
use campsite_info::components::campsite_info::CampsiteInfo;
use campsite_info::config::AppConfig;
use campsite_info::models::campsite::Campsite;
use campsite_info::models::comment::{Comment, NewComment, Rating};

fn react_lake() -> Campsite {
    Campsite {
        id: 0,
        name: "React Lake Campground".into(),
        image: "images/react-lake.jpg".into(),
        elevation: Some(1233),
        featured: false,
        description: "Nestled in the foothills of the Chrome Mountains".into(),
    }
}

fn comment(id: u32, text: &str, author: &str, date: &str) -> Comment {
    Comment {
        id,
        campsite_id: 0,
        rating: Rating::try_from(4).ok(),
        text: text.into(),
        author: author.into(),
        date: date.into(),
    }
}

// Renders the view inside a router with static inputs; `add_comment` is never reached during SSR.
fn render(
    is_loading: bool,
    err_mess: Option<&str>,
    campsite: Option<Campsite>,
    comments: Vec<Comment>,
) -> String {
    let runtime = create_runtime();
    // The breadcrumb link resolves against the router, as it would under the server.
    provide_context(RouterIntegrationContext::new(ServerIntegration {
        path: "http://localhost/directory/0".to_string(),
    }));
    let add_comment = Callback::new(|_: NewComment| {});
    let err_mess = err_mess.map(str::to_string);
    let html = view! {
        <Router>
            <CampsiteInfo
                is_loading=is_loading
                err_mess=err_mess
                campsite=campsite
                comments=comments
                add_comment=add_comment
            />
        </Router>
    }
    .into_view()
    .render_to_string()
    .to_string();
    runtime.dispose();
    html
}

#[test]
fn loading_renders_only_the_indicator() {
    let html = render(
        true,
        Some("Failed to fetch"),
        Some(react_lake()),
        vec![comment(0, "What a magnificent view!", "Tinus Lorvaldes", "2018-10-25T16:30Z")],
    );

    assert!(html.contains("Loading..."));
    assert!(html.contains("fa-spinner"));
    assert!(!html.contains("Failed to fetch"));
    assert!(!html.contains("React Lake Campground"));
    assert!(!html.contains("magnificent"));
}

#[test]
fn error_renders_only_the_message() {
    let html = render(false, Some("Failed to fetch"), Some(react_lake()), vec![]);

    assert!(html.contains("Failed to fetch"));
    assert!(!html.contains("Loading..."));
    assert!(!html.contains("React Lake Campground"));
    assert!(!html.contains("Submit Comment"));
}

#[test]
fn missing_campsite_renders_nothing_of_substance() {
    let html = render(false, None, None, vec![]);

    assert!(!html.contains("Loading..."));
    assert!(!html.contains("Directory"));
    assert!(!html.contains("Comments"));
}

#[test]
fn campsite_renders_breadcrumb_card_and_comments_in_order() {
    let html = render(
        false,
        None,
        Some(react_lake()),
        vec![
            comment(7, "Second by date, first in line", "Zed Zulu", "2020-05-01T10:00Z"),
            comment(2, "What a magnificent view!", "Tinus Lorvaldes", "2018-10-25T16:30Z"),
        ],
    );

    assert!(html.contains("href=\"/directory\""));
    assert!(html.contains("React Lake Campground"));
    assert!(html.contains("Nestled in the foothills of the Chrome Mountains"));
    assert!(html.contains(&AppConfig::default().image_url("images/react-lake.jpg")));

    let first = html.find("Second by date, first in line").unwrap();
    let second = html.find("What a magnificent view!").unwrap();
    assert!(first < second, "comments must keep the supplied order");

    assert!(html.contains("-- Zed Zulu, May 01, 2020"));
    assert!(html.contains("-- Tinus Lorvaldes, Oct 25, 2018"));
    assert!(html.contains("Rating: 4/5"));
}

#[test]
fn comment_modal_starts_closed() {
    let html = render(false, None, Some(react_lake()), vec![]);

    assert!(html.contains("Submit Comment"));
    assert!(!html.contains("Your Name"));
    assert!(!html.contains("modal-dialog"));
}
