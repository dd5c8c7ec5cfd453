use crate::config::AgentContact;
use maud::{html, Markup};

pub fn agent_card(agent: &AgentContact) -> Markup {
    html! {
        section id="agent" class="bg-gradient-to-br from-slate-900 to-slate-800 rounded-3xl p-6 md:p-8 border border-white/10" {
            h2 class="text-2xl font-bold text-white mb-1" { "Listed by " (agent.name) }
            p class="text-white/60 mb-6" { "Questions about this home? Reach out any time." }
            div class="flex flex-wrap gap-3" {
                a href={ "tel:" (agent.phone) } class="px-5 py-3 rounded-full bg-white/10 text-white" { "Call " (agent.display_phone) }
                a href={ "sms:" (agent.phone) } class="px-5 py-3 rounded-full bg-white/10 text-white" { "Send a Text" }
                a href={ "mailto:" (agent.email) } class="px-5 py-3 rounded-full bg-white/10 text-white" { (agent.email) }
                a href="#schedule" class="px-5 py-3 rounded-full bg-teal-500 text-white font-medium" { "Schedule a Tour" }
            }
        }
    }
}
