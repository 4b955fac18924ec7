use std::sync::Arc;

use taxa_core::ports::RegistryApiPort;
use taxa_core::remote::{ApiError, IcoDetails};

/// Use case for the registration screen's IČO pre-fill.
///
/// A malformed or unknown IČO comes back with `valid == false`, not as an
/// error; only transport and server failures error out.
pub struct LookupIco {
    registry_api: Arc<dyn RegistryApiPort>,
}

impl LookupIco {
    pub fn new(registry_api: Arc<dyn RegistryApiPort>) -> Self {
        Self { registry_api }
    }

    /// Create the use case from a cloned `Arc<dyn Port>` reference.
    pub fn from_ports(registry_api: Arc<dyn RegistryApiPort>) -> Self {
        Self::new(registry_api)
    }

    pub async fn execute(&self, ico: &str) -> Result<IcoDetails, ApiError> {
        self.registry_api.ico_details(ico.trim()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::MockRegistryApi;

    #[tokio::test]
    async fn lookup_trims_the_input() {
        let uc = LookupIco::from_ports(Arc::new(MockRegistryApi));
        let details = uc.execute("  12345678  ").await.unwrap();
        assert!(details.valid);
        assert_eq!(details.ico, "12345678");
    }
}
