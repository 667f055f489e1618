use crate::core::{app_state::AppState, auth::CurrentUser};
use crate::resona_db::models::Playlist;
use crate::schema::playlists;

use axum::{
	extract::State,
	http::{header, status::StatusCode},
	response::Response,
	Extension, Form,
};
use chrono::Utc;
use diesel::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistForm {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub description: String,
}

pub async fn create_playlist(
	State(app_state): State<AppState>,
	Extension(user): Extension<CurrentUser>,
	Form(form): Form<CreatePlaylistForm>,
) -> Response<String> {
	let mut field_errors: HashMap<&str, Vec<&str>> = HashMap::new();
	if form.name.trim().is_empty() {
		field_errors.insert("name", vec!["This field may not be blank."]);
	}
	if !field_errors.is_empty() {
		return json_response(StatusCode::BAD_REQUEST, serde_json::to_string(&field_errors).unwrap());
	}

	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(format!("Failed to get DB from pool: {err}"))
				.unwrap();
		}
	};

	let now = Utc::now().to_rfc3339();
	let new_playlist = Playlist {
		playlist_id: Uuid::new_v4().to_string(),
		name: form.name,
		description: form.description,
		user_id: user.user_id,
		net_value: 0.0,
		creation_date_time: now.clone(),
		last_updated_date_time: now,
	};

	match diesel::insert_into(playlists::table)
		.values(&new_playlist)
		.execute(&mut db_conn)
	{
		Ok(_) => json_response(
			StatusCode::CREATED,
			serde_json::json!({ "status": "ok" }).to_string(),
		),
		Err(err) => Response::builder()
			.status(StatusCode::INTERNAL_SERVER_ERROR)
			.body(format!("Failed to create playlist: {err}"))
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
