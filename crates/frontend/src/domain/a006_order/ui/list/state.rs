use contracts::domain::a006_order::aggregate::Order;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use serde_json::{json, Value};

/// Filters applied to the loaded order page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilterState {
    pub status: Option<OrderStatus>,
    pub clinic_id: Option<i64>,
}

impl OrderFilterState {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.clinic_id.is_none()
    }

    pub fn matches(&self, order: &Order) -> bool {
        self.status.map_or(true, |status| order.status == status)
            && self
                .clinic_id
                .map_or(true, |clinic_id| order.clinic_id == Some(clinic_id))
    }

    pub fn apply(&self, orders: &[Order]) -> Vec<Order> {
        orders.iter().filter(|o| self.matches(o)).cloned().collect()
    }

    /// Unknown codes and "" clear the status filter
    pub fn set_status(&mut self, code: &str) {
        self.status = OrderStatus::from_code(code);
    }

    /// Non-numeric values and "" clear the clinic filter
    pub fn set_clinic(&mut self, value: &str) {
        self.clinic_id = value.trim().parse().ok();
    }

    pub fn status_value(&self) -> Option<String> {
        self.status.map(|s| s.code().to_string())
    }

    pub fn clinic_value(&self) -> Option<String> {
        self.clinic_id.map(|id| id.to_string())
    }
}

/// Status options for the filter select; the leading "" entry means any status
pub fn status_options() -> Vec<Value> {
    std::iter::once(json!({ "id": "", "name": "All statuses" }))
        .chain(
            OrderStatus::all()
                .into_iter()
                .map(|s| json!({ "id": s.code(), "name": s.display_name() })),
        )
        .collect()
}

pub fn create_state() -> RwSignal<OrderFilterState> {
    RwSignal::new(OrderFilterState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: i64, status: &str, clinic_id: Option<i64>) -> Order {
        serde_json::from_value(json!({
            "id": id,
            "userId": 1,
            "status": status,
            "clinicId": clinic_id,
            "createdAt": "2024-03-15T14:02:26Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let orders = vec![order(1, "pending", None), order(2, "delivered", Some(4))];
        let filters = OrderFilterState::default();
        assert!(filters.is_empty());
        assert_eq!(filters.apply(&orders).len(), 2);
    }

    #[test]
    fn test_status_and_clinic_combine() {
        let orders = vec![
            order(1, "pending", Some(4)),
            order(2, "pending", Some(5)),
            order(3, "delivered", Some(4)),
            order(4, "pending", None),
        ];
        let mut filters = OrderFilterState::default();
        filters.set_status("pending");
        filters.set_clinic("4");

        let ids: Vec<i64> = filters.apply(&orders).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_blank_values_clear_filters() {
        let mut filters = OrderFilterState {
            status: Some(OrderStatus::Pending),
            clinic_id: Some(4),
        };
        filters.set_status("");
        filters.set_clinic("");
        assert!(filters.is_empty());

        filters.set_clinic("not-a-number");
        assert_eq!(filters.clinic_id, None);
    }

    #[test]
    fn test_status_options_lead_with_any() {
        let options = status_options();
        assert_eq!(options.len(), OrderStatus::all().len() + 1);
        assert_eq!(options[0]["id"], "");
        assert_eq!(options[4]["id"], "out_for_delivery");
        assert_eq!(options[4]["name"], "Out for delivery");
    }

    #[test]
    fn test_values_round_to_select_keys() {
        let mut filters = OrderFilterState::default();
        filters.set_status("cancelled");
        filters.set_clinic(" 12 ");
        assert_eq!(filters.status_value().as_deref(), Some("cancelled"));
        assert_eq!(filters.clinic_value().as_deref(), Some("12"));
    }
}
