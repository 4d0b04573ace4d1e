//! Mock dataset the dashboard starts with.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

use super::catalog::{Category, CustomerFeedback, DeliveryStatus, PaymentStatus};
use super::order::{LineItem, Order};
use super::product::Product;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day(y, m, d).and_time(chrono::NaiveTime::default()))
}

pub fn products() -> Vec<Product> {
    vec![
        Product::new("1", "Wireless Headphones", "TECH-001", Category::Electronics, dec!(129.99), 45)
            .with_description("High-quality wireless headphones with noise cancellation")
            .created_on(midnight(2024, 10, 1)),
        Product::new("2", "Office Chair", "FURN-001", Category::Furniture, dec!(249.99), 8)
            .with_description("Ergonomic office chair with lumbar support")
            .created_on(midnight(2024, 10, 2)),
        Product::new("3", "Cotton T-Shirt", "CLOTH-001", Category::Clothing, dec!(29.99), 150)
            .with_description("100% organic cotton t-shirt")
            .created_on(midnight(2024, 10, 3)),
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order::new(
            "ORD-001",
            "John Doe",
            vec![LineItem::new("1", 2)],
            dec!(259.98),
            day(2024, 10, 15),
            "123 Main St, City, Country",
        )
        .with_statuses(PaymentStatus::Paid, DeliveryStatus::Delivered, 100)
        .with_feedback(CustomerFeedback::Happy)
        .created_on(midnight(2024, 10, 1)),
        Order::new(
            "ORD-002",
            "Jane Smith",
            vec![LineItem::new("2", 1)],
            dec!(249.99),
            day(2024, 10, 22),
            "456 Oak Ave, City, Country",
        )
        .with_statuses(PaymentStatus::Pending, DeliveryStatus::Shipped, 65)
        .with_feedback(CustomerFeedback::Neutral)
        .created_on(midnight(2024, 10, 5)),
        Order::new(
            "ORD-003",
            "Mike Johnson",
            vec![LineItem::new("1", 1), LineItem::new("3", 3)],
            dec!(219.96),
            day(2024, 10, 25),
            "789 Pine Rd, City, Country",
        )
        .with_statuses(PaymentStatus::Paid, DeliveryStatus::Shipped, 45)
        .with_feedback(CustomerFeedback::Happy)
        .created_on(midnight(2024, 10, 8)),
        Order::new(
            "ORD-004",
            "Sarah Williams",
            vec![LineItem::new("2", 2)],
            dec!(499.98),
            day(2024, 10, 20),
            "321 Elm St, City, Country",
        )
        .with_statuses(PaymentStatus::Refunded, DeliveryStatus::Canceled, 0)
        .with_feedback(CustomerFeedback::Unhappy)
        .created_on(midnight(2024, 10, 10)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_total;

    #[test]
    fn test_seed_totals_match_seed_prices() {
        let products = products();
        let price_of = |id: &str| products.iter().find(|p| p.id == id).map(|p| p.price);

        for order in orders() {
            let total = order_total(order.items.iter().map(|i| (i.product_id.as_str(), i.quantity)), price_of);
            assert_eq!(total, Some(order.total_amount), "{}", order.id);
        }
    }
}
