use maud::{html, Markup, DOCTYPE};
use rocket::request::FlashMessage;

const MAIN_CSS_URL: &str = "/main.css";
const BRAND: &str = "IND Group Tours";

pub fn page(
    title: &str,
    email: Option<&str>,
    flash: Option<FlashMessage>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        head{
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
            title {(title) " | " (BRAND)}
            link rel="stylesheet" href=(MAIN_CSS_URL);
        }
        body{
            (header(email))
            (flash_msg(flash))
            main {
                (content)
            }
            footer {
                p { "© " (BRAND) }
            }
        }
    }
}

fn flash_msg(flash: Option<FlashMessage>) -> Markup {
    html! {
        @if let Some(msg) = flash {
            div class=(format!("flash {}", msg.kind())) {
                (msg.message())
            }
        }
    }
}

fn header(email: Option<&str>) -> Markup {
    html! {
    header {
        a class="brand" href="/" { (BRAND) }
        nav {
            a href="/" { "Home" }
            a href="/tours" { "Tours" }
            a href="/contact" { "Contact" }
            a href="/admin" { "Admin" }
        }
        @if let Some(email) = email {
            div class="msg" { "Signed in as " span class="email" { (email) } }
            form class="logout" action="/auth/sign-out" method="POST" {
                input type="submit" value="Sign out";
            }
        }
    }
    }
}
