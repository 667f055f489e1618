use crate::core::app_state::AppState;
use crate::resona_db::models::{Music, Playlist};
use crate::schema::{music, playlist_music, playlists};

use axum::{
	extract::State,
	http::{header, StatusCode},
	response::Response,
	Json,
};
use diesel::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddMusicToPlaylistPayload {
	pub music_id: Option<String>,
	pub playlist_id: Option<String>,
}

pub async fn add_music_to_playlist(
	State(app_state): State<AppState>,
	Json(payload): Json<AddMusicToPlaylistPayload>,
) -> Response<String> {
	let (Some(wanted_music_id), Some(wanted_playlist_id)) = (payload.music_id, payload.playlist_id) else {
		return json_response(
			StatusCode::OK,
			serde_json::json!({ "status": "ko", "error": "music id or playlist id is missing" }).to_string(),
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

	match music::table.find(&wanted_music_id).first::<Music>(&mut db_conn) {
		Ok(_) => (),
		Err(diesel::result::Error::NotFound) => {
			return json_response(
				StatusCode::NOT_FOUND,
				serde_json::json!({ "error": "such music does not exist!" }).to_string(),
			);
		}
		Err(err) => {
			return Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(format!("Database error: {err}"))
				.unwrap();
		}
	}

	match playlists::table.find(&wanted_playlist_id).first::<Playlist>(&mut db_conn) {
		Ok(_) => (),
		Err(diesel::result::Error::NotFound) => {
			return json_response(
				StatusCode::NOT_FOUND,
				serde_json::json!({ "error": "such playlist does not exist!" }).to_string(),
			);
		}
		Err(err) => {
			return Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(format!("Database error: {err}"))
				.unwrap();
		}
	}

	// Membership is a set; re-adding the same music is a no-op.
	let inserted = diesel::insert_or_ignore_into(playlist_music::table)
		.values((
			playlist_music::playlist_id.eq(&wanted_playlist_id),
			playlist_music::music_id.eq(&wanted_music_id),
		))
		.execute(&mut db_conn);

	match inserted {
		Ok(_) => json_response(StatusCode::OK, serde_json::json!({ "status": "ok" }).to_string()),
		Err(err) => Response::builder()
			.status(StatusCode::INTERNAL_SERVER_ERROR)
			.body(format!("Failed to add music to playlist: {err}"))
			.unwrap(),
	}
}

fn json_response(status: StatusCode, body: String) -> Response<String> {
	Response::builder()
		.status(status)
		.header(header::CONTENT_TYPE, "application/json")
		.body(body)
		.unwrap()
}
