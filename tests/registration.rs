mod common;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{header, Request, StatusCode};
use common::*;
use std::net::SocketAddr;
use tower::util::ServiceExt;

const GEO_TABLE: &[(&str, &str)] = &[
	("8.8.8.8", "United States"),
	("9.9.9.9", "South Korea"),
	("7.7.7.7", "Korea, Republic of"),
	("5.5.5.5", "France"),
];

fn signup_get(xff: Option<&str>) -> Request<Body> {
	let mut builder = Request::builder().method("GET").uri("/signup");
	if let Some(xff) = xff {
		builder = builder.header("x-forwarded-for", xff);
	}
	builder.body(Body::empty()).unwrap()
}

fn signup_post(xff: Option<&str>, body: &str) -> Request<Body> {
	let mut builder = Request::builder()
		.method("POST")
		.uri("/signup")
		.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
	if let Some(xff) = xff {
		builder = builder.header("x-forwarded-for", xff);
	}
	builder.body(Body::from(body.to_string())).unwrap()
}

fn location(response: &axum::response::Response) -> &str {
	response.headers().get(header::LOCATION).unwrap().to_str().unwrap()
}

#[tokio::test]
async fn form_renders_for_allowed_country() {
	let test_app = spawn_app(GEO_TABLE);

	let response = test_app.app.oneshot(signup_get(Some("8.8.8.8"))).await.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_string(response).await;
	assert!(body.contains("<form"));
}

#[tokio::test]
async fn disallowed_country_is_redirected() {
	let test_app = spawn_app(GEO_TABLE);

	let response = test_app.app.oneshot(signup_get(Some("5.5.5.5"))).await.unwrap();

	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	assert_eq!(location(&response), "/disallowed_country");
}

#[tokio::test]
async fn unknown_ip_is_denied() {
	let test_app = spawn_app(GEO_TABLE);

	// No forwarded header and no connection info at all.
	let response = test_app.app.oneshot(signup_get(None)).await.unwrap();

	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	assert_eq!(location(&response), "/disallowed_country");
}

#[tokio::test]
async fn unresolvable_ip_is_denied() {
	let test_app = spawn_app(GEO_TABLE);

	// 6.6.6.6 is absent from the resolver's table.
	let response = test_app.app.oneshot(signup_get(Some("6.6.6.6"))).await.unwrap();

	assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn junk_forwarded_header_is_denied() {
	let test_app = spawn_app(GEO_TABLE);

	let response = test_app.app.oneshot(signup_get(Some("not-an-ip"))).await.unwrap();

	assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn first_forwarded_entry_decides() {
	let test_app = spawn_app(GEO_TABLE);

	let denied = test_app
		.app
		.clone()
		.oneshot(signup_get(Some("5.5.5.5, 8.8.8.8")))
		.await
		.unwrap();
	assert_eq!(denied.status(), StatusCode::SEE_OTHER);

	let allowed = test_app.app.oneshot(signup_get(Some("8.8.8.8, 5.5.5.5"))).await.unwrap();
	assert_eq!(allowed.status(), StatusCode::OK);
}

#[tokio::test]
async fn peer_address_is_used_without_forwarded_header() {
	let test_app = spawn_app(GEO_TABLE);

	let request = Request::builder()
		.method("GET")
		.uri("/signup")
		.extension(ConnectInfo(SocketAddr::from(([9, 9, 9, 9], 40000))))
		.body(Body::empty())
		.unwrap();
	let response = test_app.app.oneshot(request).await.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn valid_registration_creates_user_and_redirects() {
	let test_app = spawn_app(GEO_TABLE);

	let response = test_app
		.app
		.oneshot(signup_post(
			Some("8.8.8.8"),
			"username=alice&email=alice%40example.com&password1=sekrit&password2=sekrit",
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	assert_eq!(location(&response), "/");

	let user = find_user_row(&test_app.pool, "alice").expect("user should be persisted");
	assert_eq!(user.email, "alice@example.com");
	// Stored credential is a hash, never the submitted password.
	assert_ne!(user.pwd_hash, "sekrit");
	assert!(pwhash::bcrypt::verify("sekrit", &user.pwd_hash));
}

#[tokio::test]
async fn gated_registration_performs_no_persistence() {
	let test_app = spawn_app(GEO_TABLE);

	let response = test_app
		.app
		.oneshot(signup_post(
			Some("5.5.5.5"),
			"username=alice&email=alice%40example.com&password1=sekrit&password2=sekrit",
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	assert_eq!(user_count(&test_app.pool, "alice"), 0);
}

#[tokio::test]
async fn mismatched_passwords_rerender_the_form() {
	let test_app = spawn_app(GEO_TABLE);

	let response = test_app
		.app
		.oneshot(signup_post(
			Some("8.8.8.8"),
			"username=alice&email=alice%40example.com&password1=sekrit&password2=other1",
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_string(response).await;
	assert!(body.contains("Passwords do not match"));
	assert_eq!(user_count(&test_app.pool, "alice"), 0);
}

#[tokio::test]
async fn short_password_is_rejected() {
	let test_app = spawn_app(GEO_TABLE);

	let response = test_app
		.app
		.oneshot(signup_post(
			Some("8.8.8.8"),
			"username=alice&email=alice%40example.com&password1=abc&password2=abc",
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_string(response).await;
	assert!(body.contains("at least 5 characters"));
	assert_eq!(user_count(&test_app.pool, "alice"), 0);
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
	let test_app = spawn_app(GEO_TABLE);
	seed_user(&test_app.pool, "alice", "first@example.com", "sekrit");

	let response = test_app
		.app
		.oneshot(signup_post(
			Some("8.8.8.8"),
			"username=alice&email=second%40example.com&password1=sekrit&password2=sekrit",
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_string(response).await;
	assert!(body.contains("already been registered"));
	assert_eq!(user_count(&test_app.pool, "alice"), 1);
}
