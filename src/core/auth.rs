use crate::core::app_state::AppState;
use crate::resona_db::db::find_user;
use crate::utils::jwt;

use axum::{
	extract::{Request, State},
	http::{header, StatusCode},
	middleware::Next,
	response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

/// Request-scoped authenticated identity, inserted by `require_auth` and
/// read by handlers through `Extension<CurrentUser>`.
#[derive(Debug, Clone)]
pub struct CurrentUser {
	pub user_id: String,
	pub username: String,
}

/// Default-deny layer over the API routes. Accepts the access token either
/// from the `access_token` cookie or an `Authorization: Bearer` header.
pub async fn require_auth(
	State(app_state): State<AppState>,
	jar: CookieJar,
	mut request: Request,
	next: Next,
) -> Response {
	let token = jar
		.get("access_token")
		.map(|cookie| cookie.value().to_string())
		.or_else(|| bearer_token(&request));

	let Some(token) = token else {
		return unauthorized();
	};

	let secret_key = std::env::var("JWT_SECRET_KEY").expect("JWT_SECRET_KEY must be set in .env file");

	let claims = match jwt::verify(&token, &secret_key) {
		Ok(claims) => claims,
		Err(_) => return unauthorized(),
	};

	let user = match find_user(&claims.id, &app_state.db_pool) {
		Some(user) => user,
		None => return unauthorized(),
	};

	request.extensions_mut().insert(CurrentUser {
		user_id: user.user_id,
		username: user.username,
	});

	next.run(request).await
}

fn bearer_token(request: &Request) -> Option<String> {
	request
		.headers()
		.get(header::AUTHORIZATION)
		.and_then(|value| value.to_str().ok())
		.and_then(|value| value.strip_prefix("Bearer "))
		.map(|token| token.to_string())
}

fn unauthorized() -> Response {
	(StatusCode::UNAUTHORIZED, "Required Authentication").into_response()
}
