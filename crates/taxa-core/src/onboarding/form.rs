use serde::{Deserialize, Serialize};

use crate::session::{BusinessType, ExpenseType, VatStatus};

/// Client-local step-1 form state.
///
/// Created empty when the wizard mounts and discarded once the backend
/// acknowledges step 1; from then on the server copy of the profile is
/// authoritative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub business_type: Option<BusinessType>,
    #[serde(default)]
    pub expense_type: Option<ExpenseType>,
    /// Pre-selected, so step 1 never blocks on it.
    #[serde(default)]
    pub vat_status: VatStatus,
}

impl ProfileForm {
    /// Select the accounting regime. The expense type is derived from the
    /// same choice, keeping the pair consistent.
    pub fn choose_business_type(&mut self, business_type: BusinessType) {
        self.business_type = Some(business_type);
        self.expense_type = Some(business_type.expense_type());
    }

    /// Step 1 may be submitted once the regime pair is selected.
    pub fn is_complete(&self) -> bool {
        self.business_type.is_some() && self.expense_type.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_is_incomplete() {
        assert!(!ProfileForm::default().is_complete());
    }

    #[test]
    fn choosing_a_regime_completes_the_form() {
        let mut form = ProfileForm::default();
        form.choose_business_type(BusinessType::FlatRate);
        assert!(form.is_complete());
        assert_eq!(form.expense_type, Some(ExpenseType::PausalneVydavky));
        assert_eq!(form.vat_status, VatStatus::NonPayer);
    }
}
