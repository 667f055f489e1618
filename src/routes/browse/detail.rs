use crate::core::app_state::AppState;
use crate::resona_db::models::{Album, Genre, Music, Playlist};
use crate::schema::{albums, genres, music, playlist_music, playlists};

use axum::{
	extract::State,
	http::{header, StatusCode},
	response::Response,
	Json,
};
use diesel::prelude::*;
use serde::Deserialize;

/// The three detail endpoints share one shape: look an entity up by key,
/// list its related music, serialize. This is the single parametrized
/// lookup behind all of them.
enum RelatedMusicKey {
	Playlist(String),
	Album(String),
	Genre(String),
}

impl RelatedMusicKey {
	fn absent_message(&self) -> &'static str {
		match self {
			RelatedMusicKey::Playlist(_) => "such playlist does not exist!",
			RelatedMusicKey::Album(_) => "such album does not exist!",
			RelatedMusicKey::Genre(_) => "such genre does not exist!",
		}
	}
}

/// `Ok(None)` means the keyed entity itself is absent.
fn related_music(key: &RelatedMusicKey, db_conn: &mut SqliteConnection) -> QueryResult<Option<Vec<Music>>> {
	match key {
		RelatedMusicKey::Playlist(pk) => {
			let playlist = playlists::table.find(pk).first::<Playlist>(db_conn).optional()?;
			if playlist.is_none() {
				return Ok(None);
			}
			playlist_music::table
				.filter(playlist_music::playlist_id.eq(pk))
				.inner_join(music::table)
				.select(music::all_columns)
				.load::<Music>(db_conn)
				.map(Some)
		}
		RelatedMusicKey::Album(pk) => {
			let album = albums::table.find(pk).first::<Album>(db_conn).optional()?;
			if album.is_none() {
				return Ok(None);
			}
			music::table
				.filter(music::album_id.eq(pk))
				.load::<Music>(db_conn)
				.map(Some)
		}
		RelatedMusicKey::Genre(name) => {
			let genre = genres::table
				.filter(genres::genre_name.eq(name))
				.first::<Genre>(db_conn)
				.optional()?;
			let Some(genre) = genre else {
				return Ok(None);
			};
			music::table
				.filter(music::genre_id.eq(&genre.genre_id))
				.load::<Music>(db_conn)
				.map(Some)
		}
	}
}

fn detail_response(app_state: &AppState, key: Option<RelatedMusicKey>, missing_message: &str) -> Response<String> {
	let Some(key) = key else {
		return json_response(
			StatusCode::OK,
			serde_json::json!({ "error": missing_message }).to_string(),
		);
	};

	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(format!("Failed to get DB from pool: {err}"))
				.unwrap();
		}
	};

	let entries = match related_music(&key, &mut db_conn) {
		Ok(Some(entries)) => entries,
		Ok(None) => {
			return json_response(
				StatusCode::NOT_FOUND,
				serde_json::json!({ "error": key.absent_message() }).to_string(),
			);
		}
		Err(err) => {
			return Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(format!("Database error: {err}"))
				.unwrap();
		}
	};

	let responses = match Music::to_responses(entries, &mut db_conn) {
		Ok(responses) => responses,
		Err(err) => {
			return Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(format!("Database error: {err}"))
				.unwrap();
		}
	};

	match serde_json::to_string(&responses) {
		Ok(json) => json_response(StatusCode::OK, json),
		Err(err) => Response::builder()
			.status(StatusCode::INTERNAL_SERVER_ERROR)
			.body(format!("Failed to serialize response: {err}"))
			.unwrap(),
	}
}

#[derive(Debug, Deserialize)]
pub struct PkPayload {
	pub pk: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenreNamePayload {
	pub genre_name: Option<String>,
}

pub async fn playlist_detail(State(app_state): State<AppState>, Json(payload): Json<PkPayload>) -> Response<String> {
	let key = payload.pk.map(RelatedMusicKey::Playlist);
	detail_response(&app_state, key, "you should send pk field")
}

pub async fn album_detail(State(app_state): State<AppState>, Json(payload): Json<PkPayload>) -> Response<String> {
	let key = payload.pk.map(RelatedMusicKey::Album);
	detail_response(&app_state, key, "you should send pk field")
}

pub async fn genre_detail(
	State(app_state): State<AppState>,
	Json(payload): Json<GenreNamePayload>,
) -> Response<String> {
	let key = payload.genre_name.map(RelatedMusicKey::Genre);
	detail_response(&app_state, key, "you should send genre_name field")
}

fn json_response(status: StatusCode, body: String) -> Response<String> {
	Response::builder()
		.status(status)
		.header(header::CONTENT_TYPE, "application/json")
		.body(body)
		.unwrap()
}
