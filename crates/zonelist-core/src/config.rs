//! Configuration types for zone listing
//!
//! Credentials and region are never configured here: they are resolved by
//! the provider's ambient configuration chain.

use serde::{Deserialize, Serialize};

/// Largest page size the Route 53 listing API accepts
pub const MAX_PAGE_SIZE: u32 = 100;

/// Lister configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListerConfig {
    /// Zones requested per listing page (`None` = provider default)
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl ListerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the listing page size
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if let Some(size) = self.page_size
            && !(1..=MAX_PAGE_SIZE).contains(&size)
        {
            return Err(crate::Error::config(format!(
                "Page size must be between 1 and {}. Got: {}",
                MAX_PAGE_SIZE, size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_provider_page_size() {
        let config = ListerConfig::new();
        assert_eq!(config.page_size, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn page_size_bounds() {
        assert!(ListerConfig::new().with_page_size(1).validate().is_ok());
        assert!(ListerConfig::new().with_page_size(100).validate().is_ok());
        assert!(ListerConfig::new().with_page_size(0).validate().is_err());
        assert!(ListerConfig::new().with_page_size(101).validate().is_err());
    }

    #[test]
    fn deserializes_without_page_size() {
        let config: ListerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ListerConfig::default());

        let config: ListerConfig = serde_json::from_str(r#"{"page_size": 50}"#).unwrap();
        assert_eq!(config.page_size, Some(50));
    }
}
