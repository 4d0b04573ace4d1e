//! Aggregate figures shown above the tables. Always computed over the full
//! collection, never the filtered view.

use std::fmt;

use serde::Serialize;

use crate::domain::{Category, DeliveryStatus, Order, Product};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMetrics {
    pub total: usize,
    pub pending: usize,
    pub shipped: usize,
    pub delivered: usize,
    pub canceled: usize,
    /// Mean feedback score (happy 5, neutral 3, unhappy 1).
    pub average_satisfaction: Option<f64>,
    /// Delivered orders as a whole percentage of all orders.
    pub completion_percent: Option<u8>,
}

impl OrderMetrics {
    pub fn compute(orders: &[Order]) -> Self {
        let count = |status: DeliveryStatus| orders.iter().filter(|o| o.delivery_status == status).count();
        let total = orders.len();
        let delivered = count(DeliveryStatus::Delivered);

        let (average_satisfaction, completion_percent) = if total == 0 {
            (None, None)
        } else {
            let score_sum: u32 = orders.iter().map(|o| o.customer_feedback.score()).sum();
            let percent = (delivered * 100 + total / 2) / total;
            (
                Some(f64::from(score_sum) / total as f64),
                Some(u8::try_from(percent).unwrap_or(100)),
            )
        };

        Self {
            total,
            pending: count(DeliveryStatus::Pending),
            shipped: count(DeliveryStatus::Shipped),
            delivered,
            canceled: count(DeliveryStatus::Canceled),
            average_satisfaction,
            completion_percent,
        }
    }

    pub fn count_for(&self, status: DeliveryStatus) -> usize {
        match status {
            DeliveryStatus::Pending => self.pending,
            DeliveryStatus::Shipped => self.shipped,
            DeliveryStatus::Delivered => self.delivered,
            DeliveryStatus::Canceled => self.canceled,
        }
    }

    pub fn satisfaction_label(&self) -> SatisfactionLabel {
        SatisfactionLabel(self.average_satisfaction)
    }
}

/// Average satisfaction to one decimal, or "—" when there is no data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatisfactionLabel(Option<f64>);

impl fmt::Display for SatisfactionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(avg) => write!(f, "{:.1}", avg),
            None => f.write_str("—"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMetrics {
    pub total: usize,
    pub active: usize,
    /// Distinct categories in the order they first appear.
    pub categories: Vec<Category>,
}

impl ProductMetrics {
    pub fn compute(products: &[Product]) -> Self {
        let mut categories = Vec::new();
        for product in products {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }

        Self {
            total: products.len(),
            active: products.iter().filter(|p| p.active).count(),
            categories,
        }
    }

    pub fn inactive(&self) -> usize {
        self.total - self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed;

    #[test]
    fn test_seed_order_metrics() {
        let metrics = OrderMetrics::compute(&seed::orders());
        assert_eq!(metrics.total, 4);
        assert_eq!(metrics.shipped, 2);
        assert_eq!(metrics.count_for(DeliveryStatus::Delivered), 1);
        assert_eq!(metrics.canceled, 1);
        assert_eq!(metrics.pending, 0);
        // (5 + 3 + 5 + 1) / 4
        assert_eq!(metrics.average_satisfaction, Some(3.5));
        assert_eq!(metrics.satisfaction_label().to_string(), "3.5");
        assert_eq!(metrics.completion_percent, Some(25));
    }

    #[test]
    fn test_empty_collection_has_no_averages() {
        let metrics = OrderMetrics::compute(&[]);
        assert_eq!(metrics.total, 0);
        assert_eq!(metrics.average_satisfaction, None);
        assert_eq!(metrics.completion_percent, None);
        assert_eq!(metrics.satisfaction_label().to_string(), "—");
    }

    #[test]
    fn test_metrics_follow_deletion() {
        let orders: Vec<_> = seed::orders().into_iter().filter(|o| o.id != "ORD-002").collect();
        let metrics = OrderMetrics::compute(&orders);
        assert_eq!(metrics.total, 3);
        assert_eq!(metrics.shipped, 1);
        assert_eq!(metrics.satisfaction_label().to_string(), "3.7");
    }

    #[test]
    fn test_product_facets_keep_first_seen_order() {
        let mut products = seed::products();
        products.reverse();
        products[1].active = false;

        let metrics = ProductMetrics::compute(&products);
        assert_eq!(metrics.total, 3);
        assert_eq!(metrics.active, 2);
        assert_eq!(metrics.inactive(), 1);
        assert_eq!(
            metrics.categories,
            [Category::Clothing, Category::Furniture, Category::Electronics]
        );
    }
}
