// src/domain/mortgage.rs

use serde::Serialize;

pub const DEFAULT_HOME_PRICE: f64 = 500_000.0;
pub const DEFAULT_DOWN_PAYMENT_PCT: f64 = 20.0;
pub const DEFAULT_RATE_PCT: f64 = 7.0;
pub const DEFAULT_TERM_YEARS: u32 = 30;

/// Loan terms offered by the calculator form.
pub const TERM_CHOICES: [u32; 3] = [15, 20, 30];
pub const MAX_TERM_YEARS: u32 = 100;

/// Upper bounds that keep every intermediate product finite.
pub const MAX_HOME_PRICE: f64 = 1e12;
pub const MAX_RATE_PCT: f64 = 100.0;

/// Rough yearly estimates, as a share of the home price.
const PROPERTY_TAX_RATE: f64 = 0.012;
const INSURANCE_RATE: f64 = 0.005;

/// Below this monthly rate the amortization formula degenerates to 0/0.
const ZERO_RATE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortgageInputs {
    pub home_price: f64,
    pub down_payment_pct: f64,
    pub annual_rate_pct: f64,
    pub term_years: u32,
}

impl Default for MortgageInputs {
    fn default() -> Self {
        Self {
            home_price: DEFAULT_HOME_PRICE,
            down_payment_pct: DEFAULT_DOWN_PAYMENT_PCT,
            annual_rate_pct: DEFAULT_RATE_PCT,
            term_years: DEFAULT_TERM_YEARS,
        }
    }
}

impl MortgageInputs {
    /// Defaults, with the listing price when there is one.
    pub fn for_price(price: Option<f64>) -> Self {
        let mut inputs = Self::default();
        if let Some(p) = price.filter(|p| p.is_finite() && *p > 0.0) {
            inputs.home_price = p;
        }
        inputs
    }

    /// Pulls every value into a range the formula can handle.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let finite_or = |v: f64, d: f64| if v.is_finite() { v } else { d };

        Self {
            home_price: finite_or(self.home_price, defaults.home_price).clamp(0.0, MAX_HOME_PRICE),
            down_payment_pct: finite_or(self.down_payment_pct, defaults.down_payment_pct)
                .clamp(0.0, 100.0),
            annual_rate_pct: finite_or(self.annual_rate_pct, defaults.annual_rate_pct)
                .clamp(0.0, MAX_RATE_PCT),
            term_years: self.term_years.clamp(1, MAX_TERM_YEARS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageResult {
    pub down_payment_amount: f64,
    pub loan_amount: f64,
    pub monthly_principal_interest: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub property_tax_monthly: f64,
    pub insurance_monthly: f64,
    pub estimated_total_monthly: f64,
}

/// Fixed-rate amortized payment plus flat tax and insurance estimates.
///
/// Inputs go through [`MortgageInputs::sanitized`] first, so the result is
/// always finite. A zero rate pays the loan down in equal installments.
pub fn compute_mortgage(inputs: MortgageInputs) -> MortgageResult {
    let MortgageInputs {
        home_price,
        down_payment_pct,
        annual_rate_pct,
        term_years,
    } = inputs.sanitized();

    let down_payment_amount = home_price * down_payment_pct / 100.0;
    let loan_amount = home_price - down_payment_amount;
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    let payments = f64::from(term_years * 12);

    let monthly_principal_interest = if monthly_rate.abs() < ZERO_RATE_EPSILON {
        loan_amount / payments
    } else {
        let growth = (1.0 + monthly_rate).powf(payments);
        loan_amount * monthly_rate * growth / (growth - 1.0)
    };

    let total_payment = monthly_principal_interest * payments;
    let total_interest = total_payment - loan_amount;

    let property_tax_monthly = home_price * PROPERTY_TAX_RATE / 12.0;
    let insurance_monthly = home_price * INSURANCE_RATE / 12.0;

    MortgageResult {
        down_payment_amount,
        loan_amount,
        monthly_principal_interest,
        total_payment,
        total_interest,
        property_tax_monthly,
        insurance_monthly,
        estimated_total_monthly: monthly_principal_interest + property_tax_monthly + insurance_monthly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(price: f64, down: f64, rate: f64, term: u32) -> MortgageInputs {
        MortgageInputs {
            home_price: price,
            down_payment_pct: down,
            annual_rate_pct: rate,
            term_years: term,
        }
    }

    #[test]
    fn standard_thirty_year_loan() {
        let r = compute_mortgage(inputs(500_000.0, 20.0, 7.0, 30));

        assert_eq!(r.down_payment_amount, 100_000.0);
        assert_eq!(r.loan_amount, 400_000.0);
        assert!((r.monthly_principal_interest - 2661.21).abs() < 0.01);
        assert!(r.total_interest > 0.0);
        assert!((r.property_tax_monthly - 500.0).abs() < 1e-9);
        assert!((r.insurance_monthly - 208.333).abs() < 0.001);
        assert!(
            (r.estimated_total_monthly
                - (r.monthly_principal_interest + r.property_tax_monthly + r.insurance_monthly))
                .abs()
                < 1e-9
        );
    }

    #[test]
    fn longer_term_lowers_payment_and_raises_interest() {
        let short = compute_mortgage(inputs(500_000.0, 20.0, 7.0, 30));
        let long = compute_mortgage(inputs(500_000.0, 20.0, 7.0, 60));

        assert!(long.monthly_principal_interest < short.monthly_principal_interest);
        assert!(long.total_interest > short.total_interest);
    }

    #[test]
    fn zero_rate_is_straight_division() {
        let r = compute_mortgage(inputs(450_000.0, 20.0, 0.0, 30));

        assert!(r.monthly_principal_interest.is_finite());
        assert!((r.monthly_principal_interest - 360_000.0 / 360.0).abs() < 1e-9);
        assert!(r.total_interest.abs() < 1e-6);
    }

    #[test]
    fn hostile_inputs_stay_finite() {
        let r = compute_mortgage(inputs(f64::NAN, 250.0, -3.0, 0));

        assert_eq!(r.loan_amount, 0.0);
        assert!(r.monthly_principal_interest.is_finite());
        assert!(r.estimated_total_monthly.is_finite());
    }

    #[test]
    fn huge_rate_is_capped() {
        let r = compute_mortgage(inputs(500_000.0, 20.0, 1e6, 30));
        let capped = compute_mortgage(inputs(500_000.0, 20.0, MAX_RATE_PCT, 30));

        assert!(r.monthly_principal_interest.is_finite());
        assert!(r.total_payment.is_finite());
        assert!(r.estimated_total_monthly.is_finite());
        assert_eq!(r, capped);
    }

    #[test]
    fn huge_price_is_capped() {
        let r = compute_mortgage(inputs(1e308, 20.0, 7.0, 30));

        assert_eq!(r.down_payment_amount, 2e11);
        assert_eq!(r.loan_amount, 8e11);
        assert!(r.monthly_principal_interest.is_finite());
        assert!(r.total_interest.is_finite());
        assert!(r.estimated_total_monthly.is_finite());
    }

    #[test]
    fn listing_price_seeds_inputs() {
        assert_eq!(MortgageInputs::for_price(Some(2_850_000.0)).home_price, 2_850_000.0);
        assert_eq!(MortgageInputs::for_price(None).home_price, DEFAULT_HOME_PRICE);
        assert_eq!(MortgageInputs::for_price(Some(0.0)).home_price, DEFAULT_HOME_PRICE);
    }
}
