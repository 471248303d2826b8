mod common;

use common::helpers::{random_address, random_data, spawn_app};

const ADDRESS: &str = "0x00005EA00Ac477B1030CE78506496e8C2dE24bf5";
const NEIGHBOUR_ADDRESS: &str = "0x00005EA00Ac477B1030CE78506496e8C2dE24bf6";

#[tokio::test]
async fn skyline_returns_a_png_at_the_fixed_viewport() {
    let app = spawn_app().await;

    let res = app.get_skyline(&[("address", ADDRESS)]).await;

    assert!(res.status().is_success());
    assert_eq!(
        res.headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("image/png")
    );

    let bytes = res.bytes().await.expect("failed to read response body");
    let decoded = image::load_from_memory(&bytes).expect("body is not a valid image");

    assert_eq!(decoded.width(), 400);
    assert_eq!(decoded.height(), 500);
}

#[tokio::test]
async fn repeated_requests_return_identical_bytes() {
    let app = spawn_app().await;

    let first = app
        .get_skyline(&[("address", ADDRESS)])
        .await
        .bytes()
        .await
        .expect("failed to read response body");

    let second = app
        .get_skyline(&[("address", ADDRESS)])
        .await
        .bytes()
        .await
        .expect("failed to read response body");

    assert_eq!(first, second);
}

#[tokio::test]
async fn neighbouring_addresses_render_different_images() {
    let app = spawn_app().await;

    let a = app
        .get_skyline(&[("address", ADDRESS)])
        .await
        .bytes()
        .await
        .expect("failed to read response body");

    let b = app
        .get_skyline(&[("address", NEIGHBOUR_ADDRESS)])
        .await
        .bytes()
        .await
        .expect("failed to read response body");

    assert_ne!(a, b);
}

#[tokio::test]
async fn auxiliary_data_changes_the_image() {
    let app = spawn_app().await;

    let plain = app
        .get_skyline(&[("address", ADDRESS)])
        .await
        .bytes()
        .await
        .expect("failed to read response body");

    let with_data = app
        .get_skyline(&[("address", ADDRESS), ("data", "7")])
        .await
        .bytes()
        .await
        .expect("failed to read response body");

    assert_ne!(plain, with_data);
}

#[tokio::test]
async fn random_addresses_render_successfully() {
    let app = spawn_app().await;

    for _ in 0..5 {
        let address = random_address();
        let data = random_data();

        let res = app
            .get_skyline(&[("address", &address), ("data", &data)])
            .await;

        assert!(res.status().is_success(), "{} should render", address);
    }
}

#[tokio::test]
async fn missing_address_is_rejected() {
    let app = spawn_app().await;

    let res = app.get_skyline(&[("data", "7")]).await;

    assert_eq!(res.status().as_u16(), 400);
}

#[tokio::test]
async fn malformed_address_is_rejected() {
    let app = spawn_app().await;

    for address in ["0x123", "not-an-address", "0x00005EA00Ac477B1030CE78506496e8C2dE24bg5"] {
        let res = app.get_skyline(&[("address", address)]).await;

        assert_eq!(res.status().as_u16(), 422, "{} should be rejected", address);
    }
}
