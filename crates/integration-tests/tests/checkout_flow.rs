//! Order placement and order history.

#![allow(clippy::unwrap_used)]

use maison_core::{CategoryId, OrderStatus};
use maison_integration_tests::{TestContext, dollars, shipping_address};
use maison_storefront::checkout::CheckoutError;
use maison_storefront::error::AppError;
use maison_storefront::models::ProductQuery;

#[tokio::test]
async fn checkout_requires_login() {
    let ctx = TestContext::in_memory();
    let mut cart = ctx.storefront.cart_store().unwrap();
    cart.add_item(&ctx.product("1").await, 1).unwrap();

    let auth = ctx.storefront.auth_store();
    let err = ctx
        .storefront
        .checkout(&mut cart, &auth, shipping_address(), "card")
        .unwrap_err();

    assert!(matches!(err, CheckoutError::NotAuthenticated));
    assert_eq!(cart.item_count(), 1);
}

#[tokio::test]
async fn checkout_places_order_and_clears_cart() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = TestContext::in_dir(dir.path());

    let mut auth = ctx.storefront.auth_store();
    assert!(auth.login("jane@shop.com", "secret").await);

    let mut cart = ctx.storefront.cart_store().unwrap();
    cart.add_item(&ctx.product("2").await, 1).unwrap();
    cart.add_item(&ctx.product("3").await, 2).unwrap();

    let order = ctx
        .storefront
        .checkout(&mut cart, &auth, shipping_address(), "paypal")
        .unwrap();

    assert_eq!(order.total, dollars(39997));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.payment_method, "paypal");

    let reopened = TestContext::in_dir(dir.path());
    assert!(reopened.storefront.cart_store().unwrap().is_empty());
    let orders = reopened.storefront.orders().get_orders().unwrap();
    assert_eq!(orders, vec![order]);
    assert_eq!(ctx.notices.titles().last().unwrap(), "Order placed");
}

#[tokio::test]
async fn status_updates_persist() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = TestContext::in_dir(dir.path());

    let mut auth = ctx.storefront.auth_store();
    assert!(auth.login("root@admin.com", "secret").await);
    let mut cart = ctx.storefront.cart_store().unwrap();
    cart.add_item(&ctx.product("5").await, 1).unwrap();
    let order = ctx
        .storefront
        .checkout(&mut cart, &auth, shipping_address(), "card")
        .unwrap();

    let updated = ctx
        .storefront
        .update_order_status(&auth, &order.id, OrderStatus::Processing)
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Processing);

    let reopened = TestContext::in_dir(dir.path());
    let stored = reopened
        .storefront
        .orders()
        .get_order_by_id(&order.id)
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, OrderStatus::Processing);
    assert_eq!(stored.created, order.created);
}

#[tokio::test]
async fn only_admins_change_order_status() {
    let ctx = TestContext::in_memory();

    let mut shopper = ctx.storefront.auth_store();
    assert!(shopper.login("jane@shop.com", "secret").await);
    let mut cart = ctx.storefront.cart_store().unwrap();
    cart.add_item(&ctx.product("1").await, 1).unwrap();
    let order = ctx
        .storefront
        .checkout(&mut cart, &shopper, shipping_address(), "card")
        .unwrap();

    let err = ctx
        .storefront
        .update_order_status(&shopper, &order.id, OrderStatus::Completed)
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
    let stored = ctx.storefront.orders().get_order_by_id(&order.id).unwrap().unwrap();
    assert_eq!(stored.status, OrderStatus::Pending);

    shopper.logout();
    let mut admin = ctx.storefront.auth_store();
    assert!(admin.login("root@admin.com", "secret").await);
    let updated = ctx
        .storefront
        .update_order_status(&admin, &order.id, OrderStatus::Completed)
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Completed);

    let missing = ctx
        .storefront
        .update_order_status(&admin, &"nope".into(), OrderStatus::Completed)
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn category_filtering() {
    let ctx = TestContext::in_memory();
    let products = ctx.storefront.products();

    assert_eq!(products.get_products(None).await.len(), 6);
    assert_eq!(products.get_products(Some(&CategoryId::new("1"))).await.len(), 6);

    let decor = products.get_products(Some(&CategoryId::new("6"))).await;
    assert_eq!(decor.len(), 2);
    assert!(decor.iter().all(|p| p.category == "decor"));

    assert!(products.get_products(Some(&CategoryId::new("42"))).await.is_empty());
}

#[tokio::test]
async fn search_combines_filters() {
    let ctx = TestContext::in_memory();
    let query = ProductQuery {
        category: Some(CategoryId::new("6")),
        max_price: Some(dollars(6000)),
        ..ProductQuery::default()
    };

    let found = ctx.storefront.products().search(&query).await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Minimalist Wall Clock");

    let query = ProductQuery {
        text: Some("MINIMAL".to_string()),
        ..ProductQuery::default()
    };
    assert_eq!(ctx.storefront.products().search(&query).await.len(), 2);
}
