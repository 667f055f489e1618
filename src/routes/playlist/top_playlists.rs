use crate::core::app_state::AppState;
use crate::resona_db::models::Playlist;
use crate::schema::playlists;

use axum::{
	extract::State,
	http::{header, StatusCode},
	response::Response,
};
use diesel::prelude::*;

/// All playlists, best net value first. The net value column is maintained
/// by the external recommender.
pub async fn top_playlists(State(app_state): State<AppState>) -> Response<String> {
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
		.order(playlists::net_value.desc())
		.load::<Playlist>(&mut db_conn);

	match result {
		Ok(top) => match serde_json::to_string(&top) {
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
