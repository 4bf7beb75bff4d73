use serde::Deserialize;

/// Display metadata shown inside the checkout widget
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MerchantProfile {
    pub name: String,
    pub description: String,
    pub logo_url: Option<String>,
}

impl MerchantProfile {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        logo_url: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            logo_url,
        }
    }
}
