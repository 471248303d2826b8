use std::sync::LazyLock;

use anyhow::Context;
use axum::{extract::State, http::header, response::IntoResponse, routing::get, Router};
use regex::Regex;
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};
use validator::Validate;

use crate::{
    app::{error::AppError, extrator::ValidatedQuery, skyline::generate_scene, ApiContext},
    telemetry::spawn_blocking_with_tracing,
};

#[derive(OpenApi)]
#[openapi(paths(get_skyline))]
pub struct SkylineApi;

pub static ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap());

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SkylineParams {
    /// Wallet address the skyline is derived from.
    #[validate(regex(path = *ADDRESS_REGEX))]
    address: String,

    /// Opaque auxiliary data folded into the seed as-is.
    data: Option<String>,
}

pub fn router() -> Router<ApiContext> {
    Router::new().route("/skyline", get(get_skyline))
}

#[utoipa::path(
    get,
    path = "",
    params(SkylineParams),
    responses(
        (status = 200, description = "Rendered skyline image", content_type = "image/png"),
        (status = 400, description = "Missing address"),
        (status = 422, description = "Malformed address"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(name = "Generate skyline", skip_all, fields(address = %params.address))]
async fn get_skyline(
    ctx: State<ApiContext>,
    ValidatedQuery(params): ValidatedQuery<SkylineParams>,
) -> Result<impl IntoResponse, AppError> {
    let scene = generate_scene(&params.address, params.data.as_deref());

    // Rasterization is CPU-bound; keep it off the async workers.
    let renderer = ctx.renderer.clone();
    let image = spawn_blocking_with_tracing(move || renderer.render(&scene))
        .await
        .context("render task failed to complete")??;

    Ok(([(header::CONTENT_TYPE, "image/png")], image))
}
