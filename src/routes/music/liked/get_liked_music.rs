use crate::core::{app_state::AppState, auth::CurrentUser};
use crate::resona_db::models::Music;
use crate::schema::{music, music_likes};

use axum::{
	extract::State,
	http::{header, StatusCode},
	response::Response,
	Extension,
};
use diesel::prelude::*;

pub async fn get_liked_music(State(app_state): State<AppState>, Extension(user): Extension<CurrentUser>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(format!("Failed to get DB from pool: {err}"))
				.unwrap();
		}
	};

	let query = music_likes::table
		.filter(music_likes::user_id.eq(&user.user_id))
		.inner_join(music::table)
		.select(music::all_columns)
		.load::<Music>(&mut db_conn);

	let entries = match query {
		Ok(entries) => entries,
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
		Ok(json) => Response::builder()
			.status(StatusCode::OK)
			.header(header::CONTENT_TYPE, "application/json")
			.body(json)
			.unwrap(),
		Err(err) => Response::builder()
			.status(StatusCode::INTERNAL_SERVER_ERROR)
			.body(format!("Failed to serialize response: {err}"))
			.unwrap(),
	}
}
