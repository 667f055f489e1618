use crate::core::{app_state::AppState, auth::CurrentUser};
use crate::resona_db::models::Music;
use crate::schema::{music, music_likes};

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
pub enum LikeAction {
	Like,
	Unlike,
}

#[derive(Debug, Deserialize)]
pub struct LikeMusicPayload {
	pub id: Option<String>,
	pub action: Option<LikeAction>,
}

/// Toggles the caller's membership in a music's liked-by set. Only a
/// missing music is a `ko`; any other storage failure surfaces as a 500.
pub async fn like_music(
	State(app_state): State<AppState>,
	Extension(user): Extension<CurrentUser>,
	Json(payload): Json<LikeMusicPayload>,
) -> Response<String> {
	let (Some(wanted_id), Some(action)) = (payload.id, payload.action) else {
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

	match music::table.find(&wanted_id).first::<Music>(&mut db_conn) {
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
		LikeAction::Like => diesel::insert_or_ignore_into(music_likes::table)
			.values((
				music_likes::music_id.eq(&wanted_id),
				music_likes::user_id.eq(&user.user_id),
			))
			.execute(&mut db_conn),
		LikeAction::Unlike => diesel::delete(
			music_likes::table
				.filter(music_likes::music_id.eq(&wanted_id))
				.filter(music_likes::user_id.eq(&user.user_id)),
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
			.body(format!("Failed to toggle liked state: {err}"))
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
