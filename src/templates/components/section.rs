// templates/components/section.rs
use maud::{html, Markup};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// A section that refused to render.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct RenderError(pub String);

pub type SectionResult = Result<Markup, RenderError>;

/// Renders one page section in isolation. An error or a panic inside
/// `render` is logged and replaced by a small notice, so the rest of the
/// page still goes out.
pub fn section<F>(name: &str, render: F) -> Markup
where
    F: FnOnce() -> SectionResult,
{
    match panic::catch_unwind(AssertUnwindSafe(render)) {
        Ok(Ok(markup)) => markup,
        Ok(Err(err)) => {
            tracing::warn!(section = name, error = %err, "section failed to render");
            fallback(name)
        }
        Err(payload) => {
            tracing::error!(
                section = name,
                panic = %panic_message(payload.as_ref()),
                "section panicked while rendering"
            );
            fallback(name)
        }
    }
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "A component failed while rendering the listing.".to_string()
    }
}

fn fallback(name: &str) -> Markup {
    html! {
        div class="section-fallback rounded-3xl p-6 border border-white/10 text-white/60" data-section=(name) {
            "This section could not be displayed."
        }
    }
}
