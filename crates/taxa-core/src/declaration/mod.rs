//! Local declaration estimate.
//!
//! The three-step declaration form computes a display-only estimate from
//! string inputs; the authoritative filing lives in the backend and is not
//! modeled here.

use serde::{Deserialize, Serialize};

/// Flat personal income tax rate applied to the estimate.
pub const TAX_RATE: f64 = 0.19;

/// Form of business selected on step 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompanyType {
    #[default]
    SelfEmployed,
    Company,
}

/// Raw form inputs. Amounts stay strings until the summary is computed, the
/// same way the form fields hold them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclarationForm {
    pub tax_year: i32,
    #[serde(default)]
    pub company_type: CompanyType,
    #[serde(default)]
    pub income: String,
    #[serde(default)]
    pub expenses: String,
    #[serde(default)]
    pub tax_paid: String,
}

impl DeclarationForm {
    /// Empty form for the given filing year (the UI defaults to the previous
    /// calendar year).
    pub fn for_year(tax_year: i32) -> Self {
        Self {
            tax_year,
            company_type: CompanyType::default(),
            income: String::new(),
            expenses: String::new(),
            tax_paid: String::new(),
        }
    }

    pub fn summary(&self) -> DeclarationSummary {
        let income = parse_amount(&self.income);
        let expenses = parse_amount(&self.expenses);
        let tax_paid = parse_amount(&self.tax_paid);
        DeclarationSummary {
            tax_year: self.tax_year,
            company_type: self.company_type,
            income,
            expenses,
            tax_paid,
            estimated_tax: compute_tax(income, expenses),
        }
    }
}

/// Review-step figures, recomputed live from the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclarationSummary {
    pub tax_year: i32,
    pub company_type: CompanyType,
    pub income: f64,
    pub expenses: f64,
    pub tax_paid: f64,
    pub estimated_tax: f64,
}

/// Parse a user-entered amount; anything non-numeric counts as zero.
pub fn parse_amount(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(0.0)
}

/// Display-only tax estimate: 19 % of the positive income/expense delta,
/// rounded to cents. Never negative.
pub fn compute_tax(income: f64, expenses: f64) -> f64 {
    let base = (income - expenses).max(0.0);
    round_cents(base * TAX_RATE)
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
