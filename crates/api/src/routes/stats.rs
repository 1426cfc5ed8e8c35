//! Admin statistics route.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::db::{
    self,
    stats::{DailyStat, StatTotals},
};
use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Response body for `GET /admin-stat`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStat {
    #[serde(flatten)]
    pub totals: StatTotals,
    /// One bucket per day over the trailing 30-day window, oldest first.
    pub daily: Vec<DailyStat>,
}

/// `GET /admin-stat` (auth) - storewide totals plus the 30-day daily series.
///
/// # Errors
///
/// Returns 401 without a valid token, 500 on database failure.
pub async fn admin_stat(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<AdminStat>> {
    let totals = db::stats::totals(state.pool()).await?;
    let daily = db::stats::daily_series(state.pool()).await?;

    Ok(Json(AdminStat { totals, daily }))
}
