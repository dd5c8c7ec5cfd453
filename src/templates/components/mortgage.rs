// templates/components/mortgage.rs
use crate::domain::mortgage::TERM_CHOICES;
use crate::domain::{compute_mortgage, MortgageInputs};
use crate::templates::format;
use maud::{html, Markup};

/// Calculator form and its results. The form re-requests this same panel
/// from `/mortgage` whenever an input changes.
pub fn mortgage_calculator(inputs: MortgageInputs) -> Markup {
    let inputs = inputs.sanitized();
    let result = compute_mortgage(inputs);

    html! {
        section id="mortgage-panel" class="bg-gradient-to-br from-slate-900 to-slate-800 rounded-3xl p-6 md:p-8 border border-white/10" {
            h2 class="text-2xl font-bold text-white mb-6" { "Mortgage Calculator" }

            form method="get" action="/mortgage"
                hx-get="/mortgage"
                hx-target="#mortgage-panel"
                hx-swap="outerHTML"
                hx-trigger="change, submit"
                class="grid md:grid-cols-2 gap-6 mb-8"
            {
                label class="space-y-3 text-white/80" {
                    span { "Home Price" }
                    input type="number" name="price" min="0" step="1000"
                        value=(inputs.home_price.round())
                        class="w-full h-12 px-4 rounded-lg bg-white/5 border border-white/20 text-white text-lg";
                }

                label class="space-y-3 text-white/80" {
                    span { "Down Payment: " (format::percent(inputs.down_payment_pct)) }
                    input type="range" name="down" min="0" max="50" step="1"
                        value=(inputs.down_payment_pct)
                        class="w-full";
                    span class="block text-teal-400 text-sm font-medium" {
                        (format::currency(result.down_payment_amount))
                    }
                }

                label class="space-y-3 text-white/80" {
                    span { "Interest Rate" }
                    input type="number" name="rate" min="0" step="0.1"
                        value=(inputs.annual_rate_pct)
                        class="w-full h-12 px-4 rounded-lg bg-white/5 border border-white/20 text-white text-lg";
                }

                label class="space-y-3 text-white/80" {
                    span { "Loan Term (years)" }
                    select name="term" class="w-full h-12 px-4 rounded-lg bg-white/5 border border-white/20 text-white text-lg" {
                        @for years in TERM_CHOICES {
                            option value=(years) selected[years == inputs.term_years] { (years) " years" }
                        }
                        @if !TERM_CHOICES.contains(&inputs.term_years) {
                            option value=(inputs.term_years) selected { (inputs.term_years) " years" }
                        }
                    }
                }

                noscript {
                    button type="submit" class="px-6 py-3 rounded-full bg-teal-500 text-white" { "Calculate" }
                }
            }

            div class="grid md:grid-cols-3 gap-4" {
                div class="rounded-2xl p-4 border border-teal-500/20" {
                    p class="text-white/60 text-sm mb-1" { "Principal & Interest" }
                    p class="monthly-pi text-2xl font-bold text-white" {
                        (format::currency(result.monthly_principal_interest))
                        span class="text-lg text-white/60" { "/mo" }
                    }
                }
                div class="rounded-2xl p-4 border border-blue-500/20" {
                    p class="text-white/60 text-sm mb-1" { "Estimated Total Payment" }
                    p class="monthly-total text-2xl font-bold text-white" {
                        (format::currency(result.estimated_total_monthly))
                        span class="text-lg text-white/60" { "/mo" }
                    }
                    p class="text-xs text-white/40 mt-1" { "Includes taxes & insurance" }
                }
                div class="rounded-2xl p-4 border border-purple-500/20" {
                    p class="text-white/60 text-sm mb-1" { "Total Interest Paid" }
                    p class="total-interest text-2xl font-bold text-white" {
                        (format::currency(result.total_interest))
                    }
                }
            }

            p class="text-white/40 text-xs mt-4 text-center" {
                "*This is an estimate. Actual payments may vary based on property taxes, insurance, and HOA fees."
            }
        }
    }
}
