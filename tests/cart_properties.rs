//! Property tests for cart invariants under arbitrary edit sequences.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rusty_money::iso;

use brewpos::prelude::*;

#[derive(Debug, Clone)]
enum CartOp {
    Add(usize),
    Remove(usize),
    SetQuantity(usize, String),
    AdjustQuantity(usize, i32),
}

fn catalog() -> Vec<Product> {
    [
        (1, "Latte", Decimal::from(20_000)),
        (2, "Tea", Decimal::from(15_000)),
        (3, "Croissant", Decimal::new(3_250_050, 2)),
        (4, "Water", Decimal::ZERO),
    ]
    .into_iter()
    .filter_map(|(id, name, price)| {
        Some(Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: None,
            price: Price::from_decimal(price).ok()?,
            category_id: CategoryId::new(1),
            image_url: None,
        })
    })
    .collect()
}

fn cart_op() -> impl Strategy<Value = CartOp> {
    prop_oneof![
        (0..4_usize).prop_map(CartOp::Add),
        (0..4_usize).prop_map(CartOp::Remove),
        (0..4_usize, "0{0,3}[0-9]{0,3}|-[0-9]{1,2}|[a-z]{1,3}")
            .prop_map(|(idx, raw)| CartOp::SetQuantity(idx, raw)),
        (0..4_usize, -3..4_i32).prop_map(|(idx, delta)| CartOp::AdjustQuantity(idx, delta)),
    ]
}

fn apply(cart: &mut Cart, products: &[Product], op: &CartOp) {
    match op {
        CartOp::Add(idx) => {
            if let Some(product) = products.get(*idx) {
                cart.add(product);
            }
        }
        CartOp::Remove(idx) => {
            if let Some(product) = products.get(*idx) {
                cart.remove(product.id);
            }
        }
        CartOp::SetQuantity(idx, raw) => {
            if let Some(product) = products.get(*idx) {
                let _ignored = cart.set_quantity(product.id, raw);
            }
        }
        CartOp::AdjustQuantity(idx, delta) => {
            if let Some(product) = products.get(*idx) {
                let _ignored = cart.adjust_quantity(product.id, *delta);
            }
        }
    }
}

proptest! {
    #[test]
    fn total_always_equals_sum_of_subtotals(ops in prop::collection::vec(cart_op(), 0..64)) {
        let products = catalog();
        let mut cart = Cart::new(iso::VND);

        for op in &ops {
            apply(&mut cart, &products, op);

            let expected: Decimal = cart
                .items()
                .iter()
                .map(|item| item.subtotal().map(Price::amount).unwrap_or_default())
                .sum();

            let total = cart.total().map(|money| *money.amount());

            prop_assert_eq!(total, Ok(expected));
        }
    }

    #[test]
    fn at_most_one_line_per_product(ops in prop::collection::vec(cart_op(), 0..64)) {
        let products = catalog();
        let mut cart = Cart::new(iso::VND);

        for op in &ops {
            apply(&mut cart, &products, op);
        }

        let mut ids: Vec<ProductId> = cart.items().iter().map(|item| item.product_id).collect();
        let lines = ids.len();
        ids.sort();
        ids.dedup();

        prop_assert_eq!(ids.len(), lines);
    }

    #[test]
    fn stepper_never_produces_zero_quantity(
        adds in 1..5_usize,
        deltas in prop::collection::vec(-3..4_i32, 0..32),
    ) {
        let products = catalog();
        let mut cart = Cart::new(iso::VND);

        if let Some(latte) = products.first() {
            for _ in 0..adds {
                cart.add(latte);
            }

            for delta in deltas {
                let quantity = cart.adjust_quantity(latte.id, delta);

                prop_assert!(matches!(quantity, Ok(q) if q >= 1));
            }
        }
    }
}

#[test]
fn two_lattes_and_a_tea_total_fifty_five_thousand() -> testresult::TestResult {
    let products = catalog();
    let mut cart = Cart::new(iso::VND);

    if let (Some(latte), Some(tea)) = (products.first(), products.get(1)) {
        cart.add(latte);
        cart.add(latte);
        cart.add(tea);
    }

    assert_eq!(Price::from_money(&cart.total()?)?, Price::new(55_000));
    assert_eq!(
        format_money(&cart.total()?),
        format!("55.000{}", iso::VND.symbol)
    );

    Ok(())
}
