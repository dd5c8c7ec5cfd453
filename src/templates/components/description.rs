use maud::{html, Markup};

/// Longer descriptions collapse behind a "Read more" toggle.
pub const PREVIEW_CHARS: usize = 280;

pub fn property_description(description: &str) -> Markup {
    let text = description.trim();
    if text.is_empty() {
        return html! {};
    }

    let preview: String = text.chars().take(PREVIEW_CHARS).collect();
    let needs_expansion = preview.len() < text.len();

    html! {
        section id="description" class="rounded-3xl p-6 md:p-8 border border-white/10" {
            h2 class="text-2xl font-bold text-white mb-4" { "About This Home" }
            @if needs_expansion {
                details class="text-white/80 leading-relaxed" {
                    summary class="cursor-pointer list-none" {
                        span class="preview" { (preview.trim_end()) "…" }
                        span class="block mt-3 text-teal-400 font-medium" { "Read more" }
                    }
                    p class="mt-3" { (text) }
                }
            } @else {
                p class="text-white/80 leading-relaxed" { (text) }
            }
        }
    }
}
