use crate::core::{app_state::AppState, auth::CurrentUser};
use crate::resona_db::models::Playlist;
use crate::schema::{playlist_followers, playlists};

use axum::{
	extract::State,
	http::{header, StatusCode},
	response::Response,
	Extension, Json,
};
use diesel::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowAction {
	Follow,
	Unfollow,
}

#[derive(Debug, Deserialize)]
pub struct FollowPlaylistPayload {
	pub playlist_pk: Option<String>,
	pub action: Option<FollowAction>,
}

/// Toggles the caller's membership in a playlist's follower set. Set
/// semantics: repeating an action leaves the set unchanged.
pub async fn follow_playlist(
	State(app_state): State<AppState>,
	Extension(user): Extension<CurrentUser>,
	Json(payload): Json<FollowPlaylistPayload>,
) -> Response<String> {
	let (Some(pk), Some(action)) = (payload.playlist_pk, payload.action) else {
		return ko();
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

	match playlists::table.find(&pk).first::<Playlist>(&mut db_conn) {
		Ok(_) => (),
		Err(diesel::result::Error::NotFound) => return ko(),
		Err(err) => {
			return Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(format!("Database error: {err}"))
				.unwrap();
		}
	}

	let result = match action {
		FollowAction::Follow => diesel::insert_or_ignore_into(playlist_followers::table)
			.values((
				playlist_followers::playlist_id.eq(&pk),
				playlist_followers::user_id.eq(&user.user_id),
			))
			.execute(&mut db_conn),
		FollowAction::Unfollow => diesel::delete(
			playlist_followers::table
				.filter(playlist_followers::playlist_id.eq(&pk))
				.filter(playlist_followers::user_id.eq(&user.user_id)),
		)
		.execute(&mut db_conn),
	};

	match result {
		Ok(_) => Response::builder()
			.status(StatusCode::OK)
			.header(header::CONTENT_TYPE, "application/json")
			.body(serde_json::json!({ "status": "ok" }).to_string())
			.unwrap(),
		Err(err) => Response::builder()
			.status(StatusCode::INTERNAL_SERVER_ERROR)
			.body(format!("Failed to toggle follow state: {err}"))
			.unwrap(),
	}
}

fn ko() -> Response<String> {
	Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "application/json")
		.body(serde_json::json!({ "status": "ko" }).to_string())
		.unwrap()
}
