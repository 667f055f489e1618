use crate::config::MIN_SEARCH_QUERY_LEN;
use crate::core::app_state::AppState;
use crate::resona_db::models::{Album, Chart, Music, MusicResponse, Performer, Playlist, ProfileResponse, User};
use crate::schema::{albums, charts, music, performers, playlists, users};

use axum::{
	extract::State,
	http::{header, status::StatusCode},
	response::Response,
	Json,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchPayload {
	#[serde(default)]
	pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
	pub music_results: Vec<MusicResponse>,
	pub album_results: Vec<Album>,
	pub playlist_results: Vec<Playlist>,
	pub user_results: Vec<ProfileResponse>,
	pub chart_results: Vec<Chart>,
	pub performer_results: Vec<Performer>,
	pub query: String,
}

/// One free-text query fanned out over six entity collections. Matching is
/// a case-insensitive substring test on each entity's designated text
/// fields; the lists are independent, unranked and unpaginated.
pub async fn search(State(app_state): State<AppState>, Json(payload): Json<SearchPayload>) -> Response<String> {
	if payload.q.chars().count() < MIN_SEARCH_QUERY_LEN {
		return json_response(
			StatusCode::OK,
			serde_json::json!({ "detail": "Minimum length must be 2 characters" }).to_string(),
		);
	}

	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			let msg = format!("Failed to get DB from pool: {err}");
			return Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(msg)
				.unwrap();
		}
	};

	let needle = payload.q.to_lowercase();
	let matches = |field: &str| field.to_lowercase().contains(&needle);

	let music_results = match music::table.load::<Music>(&mut db_conn) {
		Ok(entries) => entries.into_iter().filter(|m| matches(&m.name)).collect::<Vec<_>>(),
		Err(err) => return db_error(err),
	};
	let album_results = match albums::table.load::<Album>(&mut db_conn) {
		Ok(entries) => entries
			.into_iter()
			.filter(|a| matches(&a.name) || matches(&a.description))
			.collect::<Vec<_>>(),
		Err(err) => return db_error(err),
	};
	let playlist_results = match playlists::table.load::<Playlist>(&mut db_conn) {
		Ok(entries) => entries
			.into_iter()
			.filter(|p| matches(&p.name) || matches(&p.description))
			.collect::<Vec<_>>(),
		Err(err) => return db_error(err),
	};
	let user_results = match users::table.load::<User>(&mut db_conn) {
		Ok(entries) => entries
			.into_iter()
			.filter(|u| matches(&u.username))
			.map(ProfileResponse::from)
			.collect::<Vec<_>>(),
		Err(err) => return db_error(err),
	};
	let chart_results = match charts::table.load::<Chart>(&mut db_conn) {
		Ok(entries) => entries
			.into_iter()
			.filter(|c| matches(&c.name) || matches(&c.description))
			.collect::<Vec<_>>(),
		Err(err) => return db_error(err),
	};
	let performer_results = match performers::table.load::<Performer>(&mut db_conn) {
		Ok(entries) => entries
			.into_iter()
			.filter(|p| matches(&p.name) || matches(&p.description))
			.collect::<Vec<_>>(),
		Err(err) => return db_error(err),
	};

	let music_results = match Music::to_responses(music_results, &mut db_conn) {
		Ok(responses) => responses,
		Err(err) => return db_error(err),
	};

	let response = SearchResponse {
		music_results,
		album_results,
		playlist_results,
		user_results,
		chart_results,
		performer_results,
		query: payload.q,
	};

	match serde_json::to_string(&response) {
		Ok(json) => json_response(StatusCode::OK, json),
		Err(err) => Response::builder()
			.status(StatusCode::INTERNAL_SERVER_ERROR)
			.body(format!("Failed to serialize response: {err}"))
			.unwrap(),
	}
}

fn db_error<E: std::fmt::Display>(err: E) -> Response<String> {
	Response::builder()
		.status(StatusCode::INTERNAL_SERVER_ERROR)
		.body(format!("Database error: {err}"))
		.unwrap()
}

fn json_response(status: StatusCode, body: String) -> Response<String> {
	Response::builder()
		.status(status)
		.header(header::CONTENT_TYPE, "application/json")
		.body(body)
		.unwrap()
}
