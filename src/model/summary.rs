use crate::model::{OrderId, OrderLine};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Read-only snapshot produced by [`Order::summarize`](crate::model::Order::summarize).
///
/// The customer name is carried exactly as it was supplied. Anything that
/// stores a summary receives this structure and is responsible for binding
/// its fields as parameters rather than splicing them into query text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
    pub total_amount: Decimal,
}

impl OrderSummary {
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity.get())).sum()
    }
}

impl Display for OrderSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Order {} for {}", self.order_id, self.customer_name)?;
        for line in &self.lines {
            writeln!(
                f,
                "  - {} x{} @ {} = {}",
                line.item_name,
                line.quantity,
                line.unit_price,
                line.line_total()
            )?;
        }
        writeln!(f, "Total: {}", self.total_amount)?;
        write!(f, "Created: {}", self.created_at.to_rfc3339())
    }
}
