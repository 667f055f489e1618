use crate::core::{app_state::AppState, auth::CurrentUser};
use crate::resona_db::models::Playlist;
use crate::schema::playlists;

use axum::{
	extract::State,
	http::{header, StatusCode},
	response::Response,
	Extension,
};
use diesel::prelude::*;

pub async fn get_user_playlists(
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

	let result = playlists::table
		.filter(playlists::user_id.eq(&user.user_id))
		.load::<Playlist>(&mut db_conn);

	match result {
		Ok(user_playlists) => match serde_json::to_string(&user_playlists) {
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
