// templates/components/gallery.rs
use crate::templates::components::section::{RenderError, SectionResult};
use maud::{html, Markup};

/// Full-bleed photo carousel. Each slide has an anchor so thumbnails can
/// jump to it without script.
pub fn hero_gallery(photos: &[String], overlay: Markup) -> SectionResult {
    if photos.is_empty() {
        return Err(RenderError("gallery has no photos".into()));
    }

    Ok(html! {
        div class="hero relative h-[85vh] min-h-[560px] overflow-hidden" {
            div class="hero-track flex h-full overflow-x-auto snap-x snap-mandatory" {
                @for (i, photo) in photos.iter().enumerate() {
                    figure id={ "photo-" (i) } class="relative shrink-0 w-full h-full snap-center" {
                        img src=(photo)
                            alt={ "Listing photo " (i + 1) }
                            class="w-full h-full object-cover"
                            loading=(if i == 0 { "eager" } else { "lazy" });
                    }
                }
            }
            div class="absolute inset-0 bg-gradient-to-t from-slate-950 via-slate-950/30 to-transparent pointer-events-none" {}
            div class="absolute bottom-0 inset-x-0 z-10" { (overlay) }
        }
    })
}

/// Thumbnail strip; only worth showing with more than one photo.
pub fn thumbnail_strip(photos: &[String]) -> Markup {
    html! {
        @if photos.len() > 1 {
            div class="thumbnails flex gap-2 overflow-x-auto pb-2" {
                @for (i, photo) in photos.iter().enumerate() {
                    a href={ "#photo-" (i) } class="shrink-0 w-24 h-16 rounded-lg overflow-hidden border border-white/20" {
                        img src=(photo) alt={ "Thumbnail " (i + 1) } class="w-full h-full object-cover" loading="lazy";
                    }
                }
                a href="#fullscreen" class="shrink-0 px-4 h-16 rounded-lg bg-white/10 text-white text-sm flex items-center" {
                    "View all " (photos.len())
                }
            }
        }
    }
}

/// Every photo at full size, each opening the original image.
pub fn fullscreen_gallery(photos: &[String]) -> Markup {
    html! {
        section id="fullscreen" class="fullscreen-gallery space-y-4" {
            h2 class="text-2xl font-bold text-white" { "All Photos" }
            div class="grid sm:grid-cols-2 gap-4" {
                @for (i, photo) in photos.iter().enumerate() {
                    a href=(photo) target="_blank" rel="noopener" class="block rounded-2xl overflow-hidden" {
                        img src=(photo) alt={ "Listing photo " (i + 1) } class="w-full h-full object-cover" loading="lazy";
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photos(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://img/{i}.jpg")).collect()
    }

    #[test]
    fn hero_renders_every_photo_in_order() {
        let out = hero_gallery(&photos(3), html! {}).unwrap().into_string();
        let first = out.find("https://img/0.jpg").unwrap();
        let last = out.find("https://img/2.jpg").unwrap();
        assert!(first < last);
        assert!(out.contains(r#"id="photo-2""#));
    }

    #[test]
    fn empty_gallery_is_an_error() {
        assert!(hero_gallery(&[], html! {}).is_err());
    }

    #[test]
    fn single_photo_has_no_thumbnails() {
        assert_eq!(thumbnail_strip(&photos(1)).into_string(), "");
        assert!(thumbnail_strip(&photos(2)).into_string().contains("View all 2"));
    }
}
