use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{initials, Order, Product};

/// A line item joined with the product it refers to.
///
/// `product` is `None` when the product has since been deleted; the line
/// then contributes nothing to `line_total`. Totals saturate at
/// [`Decimal::MAX`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLine {
    pub product_id: String,
    pub product: Option<Product>,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// Everything the order detail page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub order: Order,
    pub lines: Vec<ResolvedLine>,
    pub client_initials: String,
}

impl OrderDetail {
    pub fn resolve(order: &Order, products: &[Product]) -> Self {
        let lines = order
            .items
            .iter()
            .map(|item| {
                let product = products.iter().find(|p| p.id == item.product_id).cloned();
                let line_total = product
                    .as_ref()
                    .map_or(Decimal::ZERO, |p| p.price.saturating_mul(Decimal::from(item.quantity)));
                ResolvedLine {
                    product_id: item.product_id.clone(),
                    product,
                    quantity: item.quantity,
                    line_total,
                }
            })
            .collect();

        Self {
            order: order.clone(),
            lines,
            client_initials: initials(&order.client_name),
        }
    }

    /// Looks the order up by id; `None` renders the "not found" state.
    pub fn find(order_id: &str, orders: &[Order], products: &[Product]) -> Option<Self> {
        orders
            .iter()
            .find(|o| o.id == order_id)
            .map(|order| Self::resolve(order, products))
    }

    /// Sum of the resolved line totals at current prices. May differ from
    /// the order's stored total, which was fixed at creation.
    pub fn current_value(&self) -> Decimal {
        self.lines
            .iter()
            .fold(Decimal::ZERO, |total, line| total.saturating_add(line.line_total))
    }
}
