use serde::{Deserialize, Serialize};

pub type LogisticsId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logistics {
    pub id: LogisticsId,
    pub description: String,
    pub reserved: bool,
    pub unit_price: f64,
    pub quantity: i32,
}

impl Logistics {
    pub fn total_price(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}
