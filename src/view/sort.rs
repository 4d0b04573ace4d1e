//! Tri-state column sorting.
//!
//! Activating the same column cycles ascending → descending → unsorted.
//! Activating a different column starts over at ascending. Unsorted means
//! insertion order. Sorting is stable.

use std::cmp::Ordering;

use crate::domain::{Order, Product};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A sortable column of a row type.
pub trait SortColumn<T>: Copy + Eq {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<C> {
    active: Option<(C, SortDirection)>,
}

impl<C> Default for SortState<C> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<C: Copy + Eq> SortState<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by(column: C, direction: SortDirection) -> Self {
        Self {
            active: Some((column, direction)),
        }
    }

    /// Advances the cycle for `column` and returns the new direction.
    pub fn toggle(&mut self, column: C) -> Option<SortDirection> {
        self.active = match self.active {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((column, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
        self.direction_of(column)
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<(C, SortDirection)> {
        self.active
    }

    /// Direction shown on `column`'s header, if it is the sorted one.
    pub fn direction_of(&self, column: C) -> Option<SortDirection> {
        self.active
            .filter(|(current, _)| *current == column)
            .map(|(_, direction)| direction)
    }

    pub fn apply<T>(&self, rows: &mut [T])
    where
        C: SortColumn<T>,
    {
        if let Some((column, direction)) = self.active {
            rows.sort_by(|a, b| match direction {
                SortDirection::Ascending => column.compare(a, b),
                SortDirection::Descending => column.compare(b, a),
            });
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductColumn {
    Name,
    Sku,
    Category,
    Price,
    Stock,
    Active,
    CreatedAt,
}

impl SortColumn<Product> for ProductColumn {
    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            ProductColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            ProductColumn::Sku => a.sku.cmp(&b.sku),
            ProductColumn::Category => a.category.as_str().cmp(b.category.as_str()),
            ProductColumn::Price => a.price.cmp(&b.price),
            ProductColumn::Stock => a.stock.cmp(&b.stock),
            ProductColumn::Active => a.active.cmp(&b.active),
            ProductColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderColumn {
    Id,
    ClientName,
    PaymentStatus,
    DeliveryStatus,
    TotalAmount,
    DeliveryProgress,
    CustomerFeedback,
    CreatedAt,
}

impl SortColumn<Order> for OrderColumn {
    fn compare(&self, a: &Order, b: &Order) -> Ordering {
        match self {
            OrderColumn::Id => a.id.cmp(&b.id),
            OrderColumn::ClientName => a.client_name.to_lowercase().cmp(&b.client_name.to_lowercase()),
            OrderColumn::PaymentStatus => a.payment_status.as_str().cmp(b.payment_status.as_str()),
            OrderColumn::DeliveryStatus => a.delivery_status.as_str().cmp(b.delivery_status.as_str()),
            OrderColumn::TotalAmount => a.total_amount.cmp(&b.total_amount),
            OrderColumn::DeliveryProgress => a.delivery_progress.cmp(&b.delivery_progress),
            OrderColumn::CustomerFeedback => a.customer_feedback.score().cmp(&b.customer_feedback.score()),
            OrderColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}
