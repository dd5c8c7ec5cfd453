use crate::config::AgentContact;
use maud::{html, Markup};

/// Sticky top bar with call / text / schedule actions.
pub fn contact_bar(agent: &AgentContact) -> Markup {
    html! {
        header class="contact-bar fixed top-0 inset-x-0 z-40 bg-slate-950/80 backdrop-blur border-b border-white/10" {
            div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between" {
                span class="text-white font-semibold tracking-tight" { (agent.name) }
                nav class="flex items-center gap-2" {
                    a href={ "tel:" (agent.phone) } class="px-4 py-2 rounded-full bg-white/10 text-white text-sm" {
                        "Call " span class="hidden sm:inline" { (agent.display_phone) }
                    }
                    a href={ "sms:" (agent.phone) } class="px-4 py-2 rounded-full bg-white/10 text-white text-sm" { "Text" }
                    a href="#schedule" class="px-4 py-2 rounded-full bg-teal-500 text-white text-sm font-medium" { "Schedule a Tour" }
                }
            }
        }
    }
}

/// The same actions as large buttons over the hero image.
pub fn floating_contact_buttons(agent: &AgentContact) -> Markup {
    html! {
        div class="flex flex-wrap gap-3" {
            a href={ "tel:" (agent.phone) } class="px-6 py-3 rounded-full bg-white text-slate-950 font-medium" { "Call Now" }
            a href={ "sms:" (agent.phone) } class="px-6 py-3 rounded-full bg-white/10 text-white border border-white/20" { "Text Us" }
            a href="#schedule" class="px-6 py-3 rounded-full bg-teal-500 text-white font-medium" { "Schedule a Tour" }
        }
    }
}
