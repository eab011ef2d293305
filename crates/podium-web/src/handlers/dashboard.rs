//! Dashboard handler — the leaderboard page itself.

use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::Utc;
use podium_ranker::{Field, Leaderboard, RankedRow, Snapshot, Summary};
use serde::Deserialize;

use crate::handlers::api::top_teams;
use crate::state::SharedState;

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

#[derive(Deserialize, Default)]
pub struct DashboardQuery {
    /// Set by the redirect after a manual refresh.
    pub refreshed: Option<u8>,
}

pub async fn dashboard(
    State(state): State<SharedState>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let outcome = state.load(false).await;
    let manual_refresh = query.refreshed.is_some() && outcome.error.is_none();
    let auto_refresh = state.config.refresh.auto;
    let interval = state.config.refresh.interval_secs;

    Html(render_dashboard(
        &outcome.snapshot,
        outcome.error.as_deref(),
        manual_refresh,
        auto_refresh.then_some(interval),
    ))
}

fn render_dashboard(
    snapshot: &Snapshot,
    error: Option<&str>,
    manual_refresh: bool,
    auto_refresh_secs: Option<u64>,
) -> String {
    let meta_refresh = match auto_refresh_secs {
        Some(secs) => format!(r#"<meta http-equiv="refresh" content="{secs}">"#),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    {meta_refresh}
    <title>Podium — Fund Raiser Leaderboard</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<div class="app-container">
<main class="main-content">
    <div class="page-header">
        <div>
            <h1 class="page-title">🏆 Fund Raiser Competition Leaderboard</h1>
            <p class="text-muted">Live standings, refreshed from the score sheet</p>
        </div>
        <form method="post" action="/refresh">
            <button class="btn btn-primary" type="submit">🔄 Refresh now</button>
        </form>
    </div>

    {banner}

    {stats}

    <div class="card">
        <div class="card-header">📊 Leaderboard</div>
        <div class="table-container">
            <table class="table sortable" id="leaderboard">
                <thead>
                    <tr>
                        <th>🥇 Rank</th>
                        <th>🏅 {name_title}</th>
                        <th>🎮 {g1}</th>
                        <th>🎯 {g2}</th>
                        <th>🎲 {g3}</th>
                        <th>🏃 {g4}</th>
                        <th>⭐ {bonus_title}</th>
                        <th>🏆 {total_title}</th>
                    </tr>
                </thead>
                <tbody>
                    {rows}
                </tbody>
            </table>
        </div>
    </div>

    {podium}

    <div class="footer text-muted">
        🏆 Fund Raiser Competition Dashboard | Last updated: {now}
    </div>
</main>
</div>
<script src="/static/js/sort.js"></script>
</body>
</html>"#,
        meta_refresh = meta_refresh,
        banner = render_banner(snapshot, error, manual_refresh),
        stats = render_stats(&snapshot.summary),
        name_title = Field::Name.title(),
        g1 = Field::Game1.title(),
        g2 = Field::Game2.title(),
        g3 = Field::Game3.title(),
        g4 = Field::Game4.title(),
        bonus_title = Field::Bonus.title(),
        total_title = Field::Total.title(),
        rows = render_rows(&snapshot.board),
        podium = render_podium(&snapshot.board),
        now = Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

/// The status strip above the table: a persistent warning when the sheet
/// could not be loaded (the table below it is the placeholder board), a
/// success note right after a manual refresh, or the quiet load timestamp.
fn render_banner(snapshot: &Snapshot, error: Option<&str>, manual_refresh: bool) -> String {
    match error {
        Some(cause) => format!(
            r#"<div class="banner banner-error">⚠️ Could not load sheet: {}</div>"#,
            escape_html(cause)
        ),
        None if manual_refresh => format!(
            r#"<div class="banner banner-success">Data refreshed at {}</div>"#,
            snapshot.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        None => format!(
            r#"<div class="banner banner-caption text-muted">Last loaded at: {}</div>"#,
            snapshot.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
    }
}

fn render_stats(summary: &Summary) -> String {
    format!(
        r#"<div class="stats-grid">
        <div class="stat-card">
            <div class="stat-value">{teams}</div>
            <div class="stat-label">Total Teams</div>
        </div>
        <div class="stat-card">
            <div class="stat-value">{highest}</div>
            <div class="stat-label">Highest Score</div>
        </div>
        <div class="stat-card">
            <div class="stat-value">{average}</div>
            <div class="stat-label">Average Score</div>
        </div>
        <div class="stat-card">
            <div class="stat-value">{leader}</div>
            <div class="stat-label">Leading Team</div>
        </div>
    </div>"#,
        teams = summary.teams,
        highest = summary.highest,
        average = summary.average,
        leader = escape_html(&summary.leader),
    )
}

fn render_rows(board: &Leaderboard) -> String {
    if board.rows.is_empty() {
        return r#"<tr><td colspan="8" class="text-center text-muted">No teams on the sheet yet.</td></tr>"#
            .to_string();
    }
    board.rows.iter().map(render_row).collect()
}

fn render_row(row: &RankedRow) -> String {
    format!(
        r#"
            <tr>
                <td><span class="rank-badge">#{rank}</span></td>
                <td class="team-name">{name}</td>
                <td>{g1}</td>
                <td>{g2}</td>
                <td>{g3}</td>
                <td>{g4}</td>
                <td>{bonus}</td>
                <td class="total">{total}</td>
            </tr>"#,
        rank = row.rank,
        name = escape_html(&row.name),
        g1 = fmt_points(row.games[0]),
        g2 = fmt_points(row.games[1]),
        g3 = fmt_points(row.games[2]),
        g4 = fmt_points(row.games[3]),
        bonus = fmt_points(row.bonus),
        total = fmt_points(row.total),
    )
}

/// Medal cards for the top three, shown once anyone has points on the board.
fn render_podium(board: &Leaderboard) -> String {
    if board.rows.is_empty() || board.total_sum() <= 0.0 {
        return String::new();
    }

    let cards: String = top_teams(board.top_three())
        .iter()
        .enumerate()
        .map(|(i, team)| {
            format!(
                r#"
        <div class="podium-card">
            <h2>{medal}</h2>
            <h3>{name}</h3>
            <p><strong>Total Points:</strong> {total}</p>
            <p><strong>Best Game:</strong> {best}</p>
        </div>"#,
                medal = MEDALS[i],
                name = escape_html(&team.name),
                total = fmt_points(team.total),
                best = Field::GAMES[team.best_game].title(),
            )
        })
        .collect();

    format!(
        r#"<div class="card">
        <div class="card-header">🥇 Top 3 Teams</div>
        <div class="podium-grid">{cards}</div>
    </div>"#
    )
}

/// Scores are whole points almost always; keep the integer look the sheet
/// has, fall back to the full value otherwise.
fn fmt_points(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ── Tests ────────────────────────────────────────────────────────────────────
