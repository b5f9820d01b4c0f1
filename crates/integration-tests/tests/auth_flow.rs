//! Mock authentication end to end.

#![allow(clippy::unwrap_used)]

use maison_integration_tests::TestContext;
use maison_storefront::storage::{Storage, keys};

#[tokio::test]
async fn admin_email_with_six_char_password_is_admin() {
    let ctx = TestContext::in_memory();
    let mut auth = ctx.storefront.auth_store();

    assert!(auth.login("x@admin.com", "abcdef").await);
    assert!(auth.is_admin());
    assert!(ctx.storefront.auth().is_logged_in());
}

#[tokio::test]
async fn other_email_is_not_admin() {
    let ctx = TestContext::in_memory();
    let mut auth = ctx.storefront.auth_store();

    assert!(auth.login("x@shop.com", "abcdef").await);
    assert!(auth.is_authenticated());
    assert!(!auth.is_admin());
}

#[tokio::test]
async fn short_password_fails_regardless_of_email() {
    let ctx = TestContext::in_memory();
    let mut auth = ctx.storefront.auth_store();

    for email in ["x@admin.com", "x@shop.com"] {
        assert!(!auth.login(email, "abcde").await);
    }
    assert!(!auth.is_authenticated());
    assert!(ctx.storage.get(keys::AUTH_TOKEN).unwrap().is_none());

    let notices = ctx.notices.take();
    assert_eq!(notices.len(), 2);
    assert!(notices.iter().all(|n| n.is_destructive() && n.title == "Login failed"));
}

#[tokio::test]
async fn email_without_at_sign_fails() {
    let ctx = TestContext::in_memory();
    let mut auth = ctx.storefront.auth_store();

    assert!(!auth.login("admin.com", "abcdef").await);
    assert!(!auth.register("admin.com", "abcdef", "Admin").await);
}

#[tokio::test]
async fn session_survives_reopen_until_logout() {
    let dir = tempfile::tempdir().unwrap();
    {
        let ctx = TestContext::in_dir(dir.path());
        assert!(ctx.storefront.auth_store().login("root@admin.com", "secret").await);
    }

    let ctx = TestContext::in_dir(dir.path());
    let mut auth = ctx.storefront.auth_store();
    assert!(auth.is_admin());
    assert_eq!(auth.user().unwrap().email.as_str(), "root@admin.com");

    auth.logout();
    let ctx = TestContext::in_dir(dir.path());
    assert!(!ctx.storefront.auth_store().is_authenticated());
    assert!(!ctx.storefront.auth().is_logged_in());
}

#[tokio::test]
async fn registration_only_notifies() {
    let ctx = TestContext::in_memory();
    let mut auth = ctx.storefront.auth_store();

    assert!(auth.register("new@shop.com", "abcdef", "New Shopper").await);
    assert!(!auth.is_authenticated());
    assert_eq!(ctx.notices.titles(), vec!["Registration successful"]);
}
