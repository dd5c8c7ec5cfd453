// templates/pages/error.rs
use crate::templates::plain_layout;
use maud::{html, Markup};

fn notice(heading: &str, message: &str, action: &str) -> Markup {
    html! {
        div class="min-h-screen flex items-center justify-center p-6" {
            div class="text-center max-w-md" {
                h2 class="text-2xl font-semibold text-white mb-2" { (heading) }
                p class="text-white/60 mb-6" { (message) }
                button type="button" onclick="window.location.reload()"
                    class="px-6 py-3 rounded-full bg-white/10 text-white hover:bg-white/20" {
                    (action)
                }
            }
        }
    }
}

/// The listing could not be fetched.
pub fn unable_to_load_page(message: &str) -> Markup {
    plain_layout("Unable to Load", notice("Unable to Load", message, "Try Again"))
}

/// Rendering failed outright.
pub fn crash_page(message: &str) -> Markup {
    let message = if message.trim().is_empty() {
        "A component failed while rendering the listing."
    } else {
        message
    };
    plain_layout("Something crashed", notice("Something crashed", message, "Reload"))
}

pub fn error_page(status: u16, message: &str) -> Markup {
    plain_layout(
        &format!("Error {status}"),
        html! {
            div class="min-h-screen flex items-center justify-center p-6" {
                div class="text-center max-w-md" {
                    h1 class="text-2xl font-semibold text-white mb-2" { "Error " (status) }
                    p class="text-white/60 mb-6" { (message) }
                    a href="/" class="text-teal-400" { "← Back to listing" }
                }
            }
        },
    )
}
