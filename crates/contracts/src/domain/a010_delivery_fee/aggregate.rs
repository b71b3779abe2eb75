use serde::{Deserialize, Serialize};

use crate::domain::common::ApiRecord;

/// Delivery price for one city or zone
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryFee {
    pub id: i64,
    pub zone: String,
    pub fee: f64,
    /// Orders at or above this amount ship free
    #[serde(default)]
    pub free_above: Option<f64>,
}

impl DeliveryFee {
    pub fn fee_for(&self, order_amount: f64) -> f64 {
        match self.free_above {
            Some(threshold) if order_amount >= threshold => 0.0,
            _ => self.fee,
        }
    }
}

impl ApiRecord for DeliveryFee {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryFeeDto {
    pub zone: String,
    pub fee: f64,
    pub free_above: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_threshold() {
        let fee = DeliveryFee {
            id: 1,
            zone: "Downtown".to_string(),
            fee: 3.0,
            free_above: Some(50.0),
        };
        assert_eq!(fee.fee_for(10.0), 3.0);
        assert_eq!(fee.fee_for(50.0), 0.0);

        let flat = DeliveryFee { free_above: None, ..fee };
        assert_eq!(flat.fee_for(500.0), 3.0);
    }
}
