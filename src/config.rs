use axum::http::{request::Parts, HeaderValue};

pub const IP: &str = "127.0.0.1";
pub const PORT: &str = "8080";

/// Countries from which account registration is accepted.
pub const ALLOWED_COUNTRIES: [&str; 4] = ["Uzbekistan", "United States", "South Korea", "Korea, Republic of"];

/// Registration requests from anywhere else land here.
pub const DISALLOWED_COUNTRY_ROUTE: &str = "/disallowed_country";

pub const PASSWORD_MINIMUM_LENGTH: usize = 5;

pub const MIN_SEARCH_QUERY_LEN: usize = 2;

pub fn allowed_origins(origin: &HeaderValue, _request: &Parts) -> bool {
	let origins = [
		"http://localhost:5173",
		"http://127.0.0.1:5173",
		"http://localhost:3000",
		"http://127.0.0.1:3000",
	];
	origins.iter().any(|&allowed| origin == allowed)
}
