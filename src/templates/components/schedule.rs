// templates/components/schedule.rs
use crate::domain::tour::TourFormErrors;
use crate::domain::TourForm;
use maud::{html, Markup};

/// Tour request form. Posts to `/tour`, which answers with either this form
/// (showing what to fix) or [`tour_success`].
pub fn tour_form(form: &TourForm, errors: &TourFormErrors) -> Markup {
    html! {
        section id="schedule" class="bg-gradient-to-br from-slate-900 to-slate-800 rounded-3xl p-6 md:p-8 border border-white/10" {
            h2 class="text-2xl font-bold text-white mb-1" { "Schedule a Tour" }
            p class="text-white/60 mb-6" { "Pick a time that works and we'll confirm shortly." }

            form method="post" action="/tour"
                hx-post="/tour"
                hx-target="#schedule"
                hx-swap="outerHTML"
                hx-disabled-elt="button"
                class="space-y-4"
                novalidate
            {
                input type="hidden" name="listing_id" value=(form.listing_id);
                input type="hidden" name="listing_address" value=(form.listing_address);
                input type="hidden" name="listing_price" value=(form.listing_price);
                input type="hidden" name="page_url" value=(form.page_url);

                (field("name", "Full Name", "text", &form.name, errors.name))
                (field("phone", "Phone", "tel", &form.phone, errors.phone))
                (field("email", "Email", "email", &form.email, errors.email))

                label class="block space-y-2 text-white/80" {
                    span { "Message (optional)" }
                    textarea name="message" rows="3"
                        class="w-full px-4 py-3 rounded-lg bg-white/5 border border-white/20 text-white" {
                        (form.message)
                    }
                }

                button type="submit" class="w-full h-12 rounded-full bg-teal-500 text-white font-medium" {
                    "Request Tour"
                }
            }
        }
    }
}

fn field(name: &str, label: &str, kind: &str, value: &str, error: Option<&str>) -> Markup {
    html! {
        label class="block space-y-2 text-white/80" {
            span { (label) " *" }
            input type=(kind) name=(name) value=(value)
                aria-invalid=(error.is_some())
                class="w-full h-12 px-4 rounded-lg bg-white/5 border border-white/20 text-white";
            @if let Some(msg) = error {
                span class="field-error block text-red-400 text-sm" { (msg) }
            }
        }
    }
}

pub fn tour_success() -> Markup {
    html! {
        section id="schedule" class="bg-gradient-to-br from-slate-900 to-slate-800 rounded-3xl p-6 md:p-8 border border-teal-500/30 text-center" {
            h2 class="text-2xl font-bold text-white mb-2" { "Request Sent!" }
            p class="text-white/60" { "We'll be in touch shortly to confirm your tour." }
        }
    }
}
