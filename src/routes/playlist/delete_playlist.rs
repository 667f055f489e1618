use crate::core::{app_state::AppState, auth::CurrentUser};
use crate::resona_db::models::{Playlist, User};
use crate::schema::{playlist_followers, playlist_music, playlists, users};

use axum::{
	extract::State,
	http::{header, status::StatusCode},
	response::Response,
	Extension, Json,
};
use diesel::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DeletePlaylistPayload {
	pub pk: Option<String>,
}

/// Ownership-checked delete. Every outcome is reported with HTTP 200 and a
/// machine-readable status text; only storage failures become 500s.
pub async fn delete_playlist(
	State(app_state): State<AppState>,
	Extension(user): Extension<CurrentUser>,
	Json(payload): Json<DeletePlaylistPayload>,
) -> Response<String> {
	let Some(pk) = payload.pk else {
		return status_response("you should send pk field");
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

	let playlist = match playlists::table.find(&pk).first::<Playlist>(&mut db_conn) {
		Ok(playlist) => playlist,
		Err(diesel::result::Error::NotFound) => return status_response("such playlist does not exist!"),
		Err(err) => {
			return Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(format!("Database error: {err}"))
				.unwrap();
		}
	};

	let creator = match users::table.find(&playlist.user_id).first::<User>(&mut db_conn) {
		Ok(creator) => creator,
		Err(err) => {
			return Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(format!("Database error: {err}"))
				.unwrap();
		}
	};

	// Identity is compared by username, not by id.
	if creator.username != user.username {
		return status_response("you can not remove this playlist");
	}

	// Membership and follower rows go first, then the playlist itself.
	if let Err(err) =
		diesel::delete(playlist_music::table.filter(playlist_music::playlist_id.eq(&pk))).execute(&mut db_conn)
	{
		return Response::builder()
			.status(StatusCode::INTERNAL_SERVER_ERROR)
			.body(format!("Failed to delete playlist music: {err}"))
			.unwrap();
	}

	if let Err(err) = diesel::delete(playlist_followers::table.filter(playlist_followers::playlist_id.eq(&pk)))
		.execute(&mut db_conn)
	{
		return Response::builder()
			.status(StatusCode::INTERNAL_SERVER_ERROR)
			.body(format!("Failed to delete playlist followers: {err}"))
			.unwrap();
	}

	match diesel::delete(playlists::table.find(&pk)).execute(&mut db_conn) {
		Ok(_) => status_response("playlist successfully removed"),
		Err(err) => Response::builder()
			.status(StatusCode::INTERNAL_SERVER_ERROR)
			.body(format!("Failed to delete playlist: {err}"))
			.unwrap(),
	}
}

fn status_response(status: &str) -> Response<String> {
	Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "application/json")
		.body(serde_json::json!({ "status": status }).to_string())
		.unwrap()
}
