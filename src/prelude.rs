//! Brewpos prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, LineItem},
    customers::{
        CreatedCustomer, Customer, CustomerField, CustomerForm, CustomerFormError, CustomerId,
    },
    ids::TypedId,
    navigation::{Access, Gate, View, gate},
    orders::{
        CreatedOrder, DateFilter, NewOrder, Order, OrderId, OrderLine, OrderSummary,
        UnknownDateFilter,
    },
    payments::{PaymentMethod, PaymentMethodId},
    prices::{Price, PriceError, format_money, format_price, total_money},
    products::{Category, CategoryId, Product, ProductId},
    reports::{DailyRevenue, MonthlyRevenue, Overview, ProductRevenue, SalesReport},
    session::{AccessToken, CurrentUser, Role, Session, UserId},
};
