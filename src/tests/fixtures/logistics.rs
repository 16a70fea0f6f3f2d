// Shared test fixture for logistics items. Defaults come from `json/logistics.json`.

use crate::modules::events::core::logistics::{Logistics, LogisticsId};

const LOGISTICS_JSON: &str = include_str!("json/logistics.json");

pub struct LogisticsBuilder {
    inner: Logistics,
}

impl Default for LogisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl LogisticsBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(LOGISTICS_JSON).unwrap(),
        }
    }

    pub fn id(mut self, v: LogisticsId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn reserved(mut self, v: bool) -> Self {
        self.inner.reserved = v;
        self
    }

    pub fn unit_price(mut self, v: f64) -> Self {
        self.inner.unit_price = v;
        self
    }

    pub fn quantity(mut self, v: i32) -> Self {
        self.inner.quantity = v;
        self
    }

    pub fn build(self) -> Logistics {
        self.inner
    }
}

#[cfg(test)]
mod logistics_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = LogisticsBuilder::default().build();
        assert_eq!(built.id, 1);
        assert_eq!(built.description, "Catering Service");
        assert!(built.reserved);
        assert_eq!(built.unit_price, 50.0);
        assert_eq!(built.quantity, 100);
    }
}
