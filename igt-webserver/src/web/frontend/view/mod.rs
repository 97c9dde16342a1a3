use maud::{html, Markup};

use igt_application::cache::QueryState;

pub(crate) mod admin;
mod login;
mod page;
pub(crate) mod tours;

pub use admin::*;
pub use login::*;
use page::*;
pub use tours::*;

pub fn contact(email: Option<&str>, contact: &crate::web::Contact, whatsapp_link: &str) -> Markup {
    page(
        "Contact",
        email,
        None,
        html! {
            section class="contact" {
                h1 { "Contact Us" }
                p { "Questions about a tour or a group booking? Get in touch with us." }
                dl {
                    dt { "Phone" }
                    dd { a href=(format!("tel:{}", contact.phone)) { (contact.phone) } }
                    dt { "Email" }
                    dd { a href=(format!("mailto:{}", contact.email)) { (contact.email) } }
                }
                a class="btn whatsapp" href=(whatsapp_link) target="_blank" rel="noopener noreferrer" {
                    "Chat on WhatsApp"
                }
            }
        },
    )
}

pub fn not_found(email: Option<&str>) -> Markup {
    page(
        "Page Not Found",
        email,
        None,
        html! {
            section class="not-found" {
                h1 { "404" }
                p { "Oops! Page not found" }
                a href="/" { "Return to Home" }
            }
        },
    )
}

pub fn access_denied(email: Option<&str>) -> Markup {
    page(
        "Access denied",
        email,
        None,
        html! {
            section class="access-denied" {
                h1 { "Access denied" }
                p { "You don't have permission to access the admin area." }
                a href="/" { "Return to Home" }
            }
        },
    )
}

/// Renders the data of a query or its pending/failed state.
fn loaded<T>(state: &QueryState<T>, render: impl FnOnce(&T) -> Markup) -> Markup {
    match state {
        QueryState::Loading => html! {
            p class="loading" { "Loading..." }
        },
        QueryState::Error(msg) => html! {
            div class="error" {
                p { "Failed to load data: " (msg) }
            }
        },
        QueryState::Data(data) => render(data),
    }
}

fn select<I, S>(name: &str, options: I, selected: &str) -> Markup
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    html! {
        select name=(name) id=(name) {
            @for option in options {
                @let option = option.as_ref();
                option value=(option) selected[option == selected] { (option) }
            }
        }
    }
}
