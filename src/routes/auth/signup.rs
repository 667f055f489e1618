use crate::config::PASSWORD_MINIMUM_LENGTH;
use crate::core::app_state::AppState;
use crate::resona_db::db::{email_taken, username_taken};
use crate::resona_db::models::User;
use crate::schema::users;

use axum::{
	extract::State,
	http::status::StatusCode,
	response::{Html, IntoResponse, Redirect, Response},
	Form,
};
use diesel::prelude::*;
use pwhash::bcrypt;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct SignupForm {
	#[serde(default)]
	pub username: String,
	#[serde(default)]
	pub email: String,
	#[serde(default)]
	pub password1: String,
	#[serde(default)]
	pub password2: String,
}

/// Where the dispatcher sends the browser after a successful registration.
/// Both a bare route and a route with trailing arguments are accepted.
pub enum RedirectTarget {
	Route(&'static str),
	RouteWith(&'static str, Vec<String>),
}

impl RedirectTarget {
	pub fn resolve(&self) -> String {
		match self {
			RedirectTarget::Route(route) => (*route).to_string(),
			RedirectTarget::RouteWith(route, args) => {
				let mut path = (*route).trim_end_matches('/').to_string();
				for arg in args {
					path.push('/');
					path.push_str(arg);
				}
				path
			}
		}
	}
}

fn success_target() -> RedirectTarget {
	RedirectTarget::Route("/")
}

pub async fn signup_form() -> Html<String> {
	Html(render_signup_form(&[]))
}

pub async fn signup(State(app_state): State<AppState>, Form(form): Form<SignupForm>) -> Response {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			let msg = format!("Failed to get DB from pool: {err}");
			return (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response();
		}
	};

	let mut errors: Vec<String> = Vec::new();

	if form.username.trim().is_empty() {
		errors.push("Username is required".to_string());
	}
	if form.email.trim().is_empty() {
		errors.push("Email is required".to_string());
	}
	if form.password1.len() < PASSWORD_MINIMUM_LENGTH {
		errors.push(format!(
			"Password must be at least {PASSWORD_MINIMUM_LENGTH} characters long"
		));
	}
	if form.password1 != form.password2 {
		errors.push("Passwords do not match".to_string());
	}
	if !form.username.trim().is_empty() && username_taken(&form.username, &mut db_conn) {
		errors.push(format!(
			"Account with username {} has already been registered",
			&form.username
		));
	}
	if !form.email.trim().is_empty() && email_taken(&form.email, &mut db_conn) {
		errors.push(format!("Account with email {} has already been registered", &form.email));
	}

	if !errors.is_empty() {
		return Html(render_signup_form(&errors)).into_response();
	}

	// The credential always goes through bcrypt, whichever path created it.
	let pwd_hash = match bcrypt::hash(&form.password1) {
		Ok(hash) => hash,
		Err(err) => {
			let msg = format!("Failed to hash password: {err}");
			return (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response();
		}
	};

	let new_user = User {
		user_id: Uuid::new_v4().to_string(),
		username: form.username,
		email: form.email,
		pwd_hash,
	};

	if let Err(err) = diesel::insert_into(users::table)
		.values(&new_user)
		.execute(&mut db_conn)
	{
		let msg = format!("Failed to create account: {err}");
		return (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response();
	}

	Redirect::to(&success_target().resolve()).into_response()
}

pub async fn disallowed_country() -> Html<&'static str> {
	Html(
		"<!DOCTYPE html>\n<html>\n<body>\n\
		 <h1>Registration unavailable</h1>\n\
		 <p>Resona does not accept registrations from your country.</p>\n\
		 </body>\n</html>",
	)
}

fn render_signup_form(errors: &[String]) -> String {
	let mut error_list = String::new();
	if !errors.is_empty() {
		error_list.push_str("<ul class=\"errors\">");
		for error in errors {
			error_list.push_str(&format!("<li>{error}</li>"));
		}
		error_list.push_str("</ul>");
	}

	format!(
		"<!DOCTYPE html>\n<html>\n<body>\n\
		 <h1>Create your Resona account</h1>\n{error_list}\n\
		 <form method=\"post\" action=\"/signup\">\n\
		 <input name=\"username\" placeholder=\"Username\">\n\
		 <input name=\"email\" type=\"email\" placeholder=\"Email\">\n\
		 <input name=\"password1\" type=\"password\" placeholder=\"Password\">\n\
		 <input name=\"password2\" type=\"password\" placeholder=\"Repeat password\">\n\
		 <button type=\"submit\">Sign up</button>\n\
		 </form>\n</body>\n</html>"
	)
}
