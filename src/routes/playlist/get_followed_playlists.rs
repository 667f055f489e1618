use crate::core::{app_state::AppState, auth::CurrentUser};
use crate::resona_db::models::Playlist;
use crate::schema::{playlist_followers, playlists};

use axum::{
	extract::State,
	http::{header, StatusCode},
	response::Response,
	Extension,
};
use diesel::prelude::*;

pub async fn get_followed_playlists(
	State(app_state): State<AppState>,
	Extension(user): Extension<CurrentUser>,
) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(format!("Failed to get DB from pool: {err}"))
				.unwrap();
		}
	};

	let result = playlist_followers::table
		.filter(playlist_followers::user_id.eq(&user.user_id))
		.inner_join(playlists::table)
		.select(playlists::all_columns)
		.load::<Playlist>(&mut db_conn);

	match result {
		Ok(followed) => match serde_json::to_string(&followed) {
			Ok(json) => Response::builder()
				.status(StatusCode::OK)
				.header(header::CONTENT_TYPE, "application/json")
				.body(json)
				.unwrap(),
			Err(err) => Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(format!("Failed to serialize response: {err}"))
				.unwrap(),
		},
		Err(err) => Response::builder()
			.status(StatusCode::INTERNAL_SERVER_ERROR)
			.body(format!("Database error: {err}"))
			.unwrap(),
	}
}
