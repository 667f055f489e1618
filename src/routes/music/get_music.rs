use crate::core::app_state::AppState;
use crate::resona_db::models::Music;
use crate::schema::music::dsl::*;

use axum::{
	extract::{Query, State},
	http::{header, StatusCode},
	response::Response,
};
use diesel::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MusicQuery {
	pub id: Option<String>,
}

/// Detail fetch with a view-count side effect. The counter is bumped with a
/// single in-database increment, so two racing fetches each count.
pub async fn get_music(State(app_state): State<AppState>, Query(params): Query<MusicQuery>) -> Response<String> {
	let Some(wanted_id) = params.id else {
		return json_response(
			StatusCode::OK,
			serde_json::json!({ "error": "wrong parameters are sent" }).to_string(),
		);
	};

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

	let updated = diesel::update(music.filter(music_id.eq(&wanted_id)))
		.set(number_of_views.eq(number_of_views + 1))
		.execute(&mut db_conn);

	match updated {
		Ok(0) => {
			return json_response(
				StatusCode::NOT_FOUND,
				serde_json::json!({ "error": "such music does not exist!" }).to_string(),
			);
		}
		Ok(_) => (),
		Err(err) => {
			return Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(format!("Database error: {err}"))
				.unwrap();
		}
	}

	let entry = match music.filter(music_id.eq(&wanted_id)).first::<Music>(&mut db_conn) {
		Ok(entry) => entry,
		Err(err) => {
			return Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(format!("Database error: {err}"))
				.unwrap();
		}
	};

	let response = match entry.to_response(&mut db_conn) {
		Ok(response) => response,
		Err(err) => {
			return Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(format!("Database error: {err}"))
				.unwrap();
		}
	};

	match serde_json::to_string(&response) {
		Ok(json) => json_response(StatusCode::OK, json),
		Err(err) => Response::builder()
			.status(StatusCode::INTERNAL_SERVER_ERROR)
			.body(format!("Failed to serialize response: {err}"))
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
