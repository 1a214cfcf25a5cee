use std::rc::Rc;

use dioxus::prelude::*;

use crate::api::models::{Course, CourseKind};
use crate::api::moderation::Moderation;
use crate::api::ApiCmd;
use crate::components::common::{EmptyState, LoadingState, SearchInput};
use crate::components::{AppState, ToastLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompletionFilter {
    All,
    Completed,
    Drafts,
}

#[component]
pub fn CoursesComponent() -> Element {
    let app_state = use_context::<AppState>();
    let cmd_tx = use_context::<tokio::sync::mpsc::UnboundedSender<ApiCmd>>();

    let search = use_signal(String::new);
    let mut kind_filter = use_signal(|| None::<CourseKind>);
    let mut completion_filter = use_signal(|| CompletionFilter::All);

    let cmd_tx_mount = cmd_tx.clone();
    use_effect(move || {
        let _ = cmd_tx_mount.send(ApiCmd::FetchCourses);
    });

    let courses = app_state.courses.read().clone();

    let body = match courses {
        None => rsx! {
            LoadingState { label: "Loading courses...".to_string() }
        },
        Some(courses) => {
            let needle = search().to_lowercase();
            let visible: Vec<Course> = courses
                .iter()
                .filter(|c| {
                    needle.is_empty()
                        || c.title.to_lowercase().contains(&needle)
                        || c.author.to_lowercase().contains(&needle)
                })
                .filter(|c| kind_filter().map_or(true, |k| c.kind == k))
                .filter(|c| match completion_filter() {
                    CompletionFilter::All => true,
                    CompletionFilter::Completed => c.completed,
                    CompletionFilter::Drafts => !c.completed,
                })
                .cloned()
                .collect();

            if visible.is_empty() {
                rsx! {
                    EmptyState {
                        icon: "📚".to_string(),
                        title: "No courses found".to_string(),
                        hint: "Try different search terms or filters.".to_string(),
                    }
                }
            } else {
                rsx! {
                    div { class: "course-grid",
                        for course in visible.iter() {
                            CourseCard { key: "{course.id}", course: course.clone() }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "page-header mb-6",
                h1 { class: "page-title", "Courses" }
                p { class: "text-secondary", "Everything generated on the platform." }
            }

            div { class: "flex gap-2 mb-4 flex-wrap items-center",
                SearchInput { value: search, placeholder: "Search by title or author...".to_string() }

                button {
                    class: if kind_filter().is_none() { "btn btn-primary btn-sm" } else { "btn btn-secondary btn-sm" },
                    onclick: move |_| kind_filter.set(None),
                    "All types"
                }
                button {
                    class: if kind_filter() == Some(CourseKind::Video) { "btn btn-primary btn-sm" } else { "btn btn-secondary btn-sm" },
                    onclick: move |_| kind_filter.set(Some(CourseKind::Video)),
                    "Video"
                }
                button {
                    class: if kind_filter() == Some(CourseKind::Theory) { "btn btn-primary btn-sm" } else { "btn btn-secondary btn-sm" },
                    onclick: move |_| kind_filter.set(Some(CourseKind::Theory)),
                    "Theory"
                }

                span { class: "filter-divider" }

                button {
                    class: if completion_filter() == CompletionFilter::All { "btn btn-primary btn-sm" } else { "btn btn-secondary btn-sm" },
                    onclick: move |_| completion_filter.set(CompletionFilter::All),
                    "All"
                }
                button {
                    class: if completion_filter() == CompletionFilter::Completed { "btn btn-primary btn-sm" } else { "btn btn-secondary btn-sm" },
                    onclick: move |_| completion_filter.set(CompletionFilter::Completed),
                    "Completed"
                }
                button {
                    class: if completion_filter() == CompletionFilter::Drafts { "btn btn-primary btn-sm" } else { "btn btn-secondary btn-sm" },
                    onclick: move |_| completion_filter.set(CompletionFilter::Drafts),
                    "In progress"
                }
            }

            {body}
        }
    }
}

#[component]
fn CourseCard(course: Course) -> Element {
    let app_state = use_context::<AppState>();
    let cmd_tx = use_context::<tokio::sync::mpsc::UnboundedSender<ApiCmd>>();
    let moderation = use_context::<Rc<dyn Moderation>>();

    let created = course.created_at.format("%Y-%m-%d").to_string();
    let share_id = course.id.clone();
    let approve_id = course.id.clone();
    let takedown_id = course.id.clone();
    let moderation_approve = moderation.clone();
    let moderation_takedown = moderation;

    rsx! {
        div { class: "card course-card",
            if !course.thumbnail.is_empty() {
                img { class: "course-thumb", src: "{course.thumbnail}", alt: "{course.title}" }
            } else {
                div { class: "course-thumb course-thumb-fallback", "📚" }
            }

            div { class: "flex gap-2 items-center mb-2",
                span { class: "badge badge-primary", "{course.kind.label()}" }
                if course.completed {
                    span { class: "badge badge-accent", "Completed" }
                } else {
                    span { class: "badge", "In progress" }
                }
            }

            h3 { class: "font-bold", "{course.title}" }
            p { class: "text-secondary text-sm", "By {course.author}" }
            p { class: "text-muted text-xs mb-3", "Created {created}" }

            div { class: "flex gap-2 flex-wrap",
                button {
                    class: "btn btn-secondary btn-sm",
                    onclick: move |_| {
                        let _ = cmd_tx.send(ApiCmd::FetchShareLink { course_id: share_id.clone() });
                    },
                    "Share"
                }
                button {
                    class: "btn btn-secondary btn-sm",
                    onclick: move |_| {
                        if let Err(e) = moderation_approve.approve(&approve_id) {
                            app_state.push_toast(ToastLevel::Info, e.to_string());
                        }
                    },
                    "Approve"
                }
                button {
                    class: "btn btn-danger btn-sm",
                    onclick: move |_| {
                        if let Err(e) = moderation_takedown.take_down(&takedown_id) {
                            app_state.push_toast(ToastLevel::Info, e.to_string());
                        }
                    },
                    "Take down"
                }
            }
        }
    }
}
