use dioxus::prelude::*;

use crate::components::common::ToastHost;
use crate::session::SessionCache;
use crate::Route;

/// Shell layout: collapsible sidebar, topbar and the routed page content.
#[component]
pub fn NavComponent() -> Element {
    let session = use_context::<SessionCache>();
    let mut collapsed = use_signal(|| false);

    let dark = (session.dark_mode)();
    let shell_class = if dark { "app-shell dark" } else { "app-shell" };
    let sidebar_class = if collapsed() {
        "sidebar collapsed"
    } else {
        "sidebar"
    };

    rsx! {
        div { class: "{shell_class}",
            aside { class: "{sidebar_class}",
                div { class: "nav-logo",
                    div { class: "logo-icon" }
                    if !collapsed() {
                        span { class: "logo-text", "CourseForge" }
                    }
                }

                nav { class: "nav-links",
                    Link {
                        to: Route::DashboardComponent {},
                        class: "nav-link",
                        active_class: "active",
                        "Dashboard"
                    }
                    Link {
                        to: Route::AdminsComponent {},
                        class: "nav-link",
                        active_class: "active",
                        "Admins"
                    }
                    Link {
                        to: Route::UsersComponent {},
                        class: "nav-link",
                        active_class: "active",
                        "Users"
                    }
                    Link {
                        to: Route::CoursesComponent {},
                        class: "nav-link",
                        active_class: "active",
                        "Courses"
                    }
                    Link {
                        to: Route::PaidUsersComponent {},
                        class: "nav-link",
                        active_class: "active",
                        "Paid Users"
                    }
                    Link {
                        to: Route::ContactsComponent {},
                        class: "nav-link",
                        active_class: "active",
                        "Contacts"
                    }
                    Link {
                        to: Route::PolicyComponent {},
                        class: "nav-link",
                        active_class: "active",
                        "Policies"
                    }
                }

                div { class: "sidebar-footer",
                    button {
                        class: "btn btn-ghost btn-sm w-full",
                        onclick: move |_| session.toggle_dark_mode(),
                        if dark { "Light mode" } else { "Dark mode" }
                    }
                }
            }

            div { class: "content-area",
                header { class: "topbar",
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| collapsed.set(!collapsed()),
                        "☰"
                    }
                    span { class: "topbar-title", "Admin Console" }
                }

                main { class: "flex-1",
                    Outlet::<Route> {}
                }
            }

            ToastHost {}
        }
    }
}
