use crate::templates::components::section::{RenderError, SectionResult};
use maud::html;
use url::Url;

/// Links to the 3D walkthrough and the video tour, whichever exist.
pub fn virtual_tours(virtual_tour: Option<&str>, video_tour: Option<&str>) -> SectionResult {
    let tours: Vec<(&str, &str, Url)> = [
        ("3D Virtual Tour", "Walk through every room", virtual_tour),
        ("Video Tour", "Watch the guided video", video_tour),
    ]
    .into_iter()
    .filter_map(|(title, blurb, link)| link.map(|l| (title, blurb, l)))
    .map(|(title, blurb, link)| safe_link(link).map(|url| (title, blurb, url)))
    .collect::<Result<_, _>>()?;

    Ok(html! {
        @if !tours.is_empty() {
            section id="tours" class="grid md:grid-cols-2 gap-4" {
                @for (title, blurb, url) in &tours {
                    a href=(url.as_str()) target="_blank" rel="noopener"
                        class="block rounded-3xl p-6 border border-white/10 bg-gradient-to-br from-slate-900 to-slate-800" {
                        h3 class="text-xl font-semibold text-white" { (title) }
                        p class="text-white/60" { (blurb) }
                    }
                }
            }
        }
    })
}

// Only web links; anything else (javascript:, data:) is refused.
fn safe_link(link: &str) -> Result<Url, RenderError> {
    let url = Url::parse(link.trim()).map_err(|e| RenderError(format!("tour link {link:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RenderError(format!("tour link with scheme {other:?}"))),
    }
}
