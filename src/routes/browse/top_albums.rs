use crate::core::app_state::AppState;
use crate::resona_db::models::Album;
use crate::schema::albums;

use axum::{
	extract::State,
	http::{header, StatusCode},
	response::Response,
};
use diesel::prelude::*;

pub async fn top_albums(State(app_state): State<AppState>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(format!("Failed to get DB from pool: {err}"))
				.unwrap();
		}
	};

	let result = albums::table.order(albums::net_value.desc()).load::<Album>(&mut db_conn);

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
