use super::page::*;
use maud::{html, Markup};
use rocket::request::FlashMessage;

pub fn login(flash: Option<FlashMessage>) -> Markup {
    page(
        "Admin Login",
        None,
        flash,
        html! {
          form class="login" action="/auth/sign-in" method="POST" {
              fieldset{
                legend { "Admin Login" }
                label {
                    "Email:"
                    br;
                    input type="email" name="email" placeholder="admin@example.com";
                }
                br;
                label{
                    "Password:"
                    br;
                    input type="password" name="password" placeholder="Password";
                }
                br;
                input type="submit" value="Sign In";
              }
          }
        },
    )
}
