#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use axum::Router;
use diesel::prelude::*;
use resona_backend::core::app_state::AppState;
use resona_backend::core::geo::CountryResolver;
use resona_backend::core::routes::configure_routes;
use resona_backend::resona_db::db::{pool_from_url, run_migrations, DatabasePool};
use resona_backend::resona_db::models::{Album, Chart, Genre, Music, Performer, Playlist, User};
use resona_backend::schema::{
	albums, charts, genres, music, music_likes, music_performers, performers, playlist_followers, playlist_music,
	playlists, users,
};
use resona_backend::utils::{exp, jwt};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use tempfile::NamedTempFile;
use uuid::Uuid;

pub const JWT_SECRET: &str = "test-secret";

/// Country lookups from a fixed table instead of a MaxMind database.
pub struct StaticResolver {
	countries: HashMap<IpAddr, String>,
}

impl StaticResolver {
	pub fn new(entries: &[(&str, &str)]) -> StaticResolver {
		let countries = entries
			.iter()
			.map(|(ip, country)| (ip.parse().unwrap(), country.to_string()))
			.collect();
		StaticResolver { countries }
	}
}

impl CountryResolver for StaticResolver {
	fn country_name(&self, ip: IpAddr) -> Option<String> {
		self.countries.get(&ip).cloned()
	}
}

pub struct TestApp {
	pub app: Router,
	pub pool: DatabasePool,
	_db_file: NamedTempFile,
}

pub fn spawn_app(geo_entries: &[(&str, &str)]) -> TestApp {
	std::env::set_var("JWT_SECRET_KEY", JWT_SECRET);

	let db_file = NamedTempFile::new().unwrap();
	let db_url = db_file.path().to_str().unwrap().to_string();
	run_migrations(&db_url);
	let pool = pool_from_url(&db_url);

	let app_state = AppState {
		db_pool: pool.clone(),
		geo: Arc::new(StaticResolver::new(geo_entries)),
	};

	TestApp {
		app: configure_routes(app_state),
		pool,
		_db_file: db_file,
	}
}

// ---------------------------------------------------------------- requests

pub fn auth_cookie(user: &User) -> String {
	let token = jwt::generate(&user.user_id, exp::expiration_from_min(60), JWT_SECRET).unwrap();
	format!("access_token={token}")
}

pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
	let mut builder = Request::builder().method("GET").uri(uri);
	if let Some(cookie) = cookie {
		builder = builder.header(header::COOKIE, cookie);
	}
	builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, cookie: Option<&str>, payload: serde_json::Value) -> Request<Body> {
	let mut builder = Request::builder()
		.method("POST")
		.uri(uri)
		.header(header::CONTENT_TYPE, "application/json");
	if let Some(cookie) = cookie {
		builder = builder.header(header::COOKIE, cookie);
	}
	builder.body(Body::from(payload.to_string())).unwrap()
}

pub fn post_form(uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
	let mut builder = Request::builder()
		.method("POST")
		.uri(uri)
		.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
	if let Some(cookie) = cookie {
		builder = builder.header(header::COOKIE, cookie);
	}
	builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_string(response: axum::response::Response) -> String {
	let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
	String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
	let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
	serde_json::from_slice(&bytes).unwrap()
}

// ------------------------------------------------------------------ seeds

pub fn seed_user(pool: &DatabasePool, username: &str, email: &str, password: &str) -> User {
	let user = User {
		user_id: Uuid::new_v4().to_string(),
		username: username.to_string(),
		email: email.to_string(),
		pwd_hash: pwhash::bcrypt::hash(password).unwrap(),
	};
	let mut conn = pool.get().unwrap();
	diesel::insert_into(users::table).values(&user).execute(&mut conn).unwrap();
	user
}

pub fn seed_music(pool: &DatabasePool, name: &str) -> Music {
	seed_music_in(pool, name, None, None)
}

pub fn seed_music_in(pool: &DatabasePool, name: &str, album_id: Option<&str>, genre_id: Option<&str>) -> Music {
	let entry = Music {
		music_id: Uuid::new_v4().to_string(),
		name: name.to_string(),
		file_link: format!("/media/{name}.mp3"),
		number_of_views: 0,
		album_id: album_id.map(|id| id.to_string()),
		genre_id: genre_id.map(|id| id.to_string()),
	};
	let mut conn = pool.get().unwrap();
	diesel::insert_into(music::table).values(&entry).execute(&mut conn).unwrap();
	entry
}

pub fn credit_performer(pool: &DatabasePool, entry: &Music, performer_name: &str, position: i32) -> Performer {
	let performer = Performer {
		performer_id: Uuid::new_v4().to_string(),
		name: performer_name.to_string(),
		description: String::new(),
	};
	let mut conn = pool.get().unwrap();
	diesel::insert_into(performers::table)
		.values(&performer)
		.execute(&mut conn)
		.unwrap();
	diesel::insert_into(music_performers::table)
		.values((
			music_performers::music_id.eq(&entry.music_id),
			music_performers::performer_id.eq(&performer.performer_id),
			music_performers::position.eq(position),
		))
		.execute(&mut conn)
		.unwrap();
	performer
}

pub fn seed_performer(pool: &DatabasePool, name: &str, description: &str) -> Performer {
	let performer = Performer {
		performer_id: Uuid::new_v4().to_string(),
		name: name.to_string(),
		description: description.to_string(),
	};
	let mut conn = pool.get().unwrap();
	diesel::insert_into(performers::table)
		.values(&performer)
		.execute(&mut conn)
		.unwrap();
	performer
}

pub fn seed_album(pool: &DatabasePool, name: &str, description: &str, net_value: f64) -> Album {
	let album = Album {
		album_id: Uuid::new_v4().to_string(),
		name: name.to_string(),
		description: description.to_string(),
		net_value,
	};
	let mut conn = pool.get().unwrap();
	diesel::insert_into(albums::table).values(&album).execute(&mut conn).unwrap();
	album
}

pub fn seed_genre(pool: &DatabasePool, genre_name: &str) -> Genre {
	let genre = Genre {
		genre_id: Uuid::new_v4().to_string(),
		genre_name: genre_name.to_string(),
		description: String::new(),
	};
	let mut conn = pool.get().unwrap();
	diesel::insert_into(genres::table).values(&genre).execute(&mut conn).unwrap();
	genre
}

pub fn seed_chart(pool: &DatabasePool, name: &str, description: &str) -> Chart {
	let chart = Chart {
		chart_id: Uuid::new_v4().to_string(),
		name: name.to_string(),
		description: description.to_string(),
	};
	let mut conn = pool.get().unwrap();
	diesel::insert_into(charts::table).values(&chart).execute(&mut conn).unwrap();
	chart
}

pub fn seed_playlist(pool: &DatabasePool, owner: &User, name: &str, description: &str, net_value: f64) -> Playlist {
	let now = chrono::Utc::now().to_rfc3339();
	let playlist = Playlist {
		playlist_id: Uuid::new_v4().to_string(),
		name: name.to_string(),
		description: description.to_string(),
		user_id: owner.user_id.clone(),
		net_value,
		creation_date_time: now.clone(),
		last_updated_date_time: now,
	};
	let mut conn = pool.get().unwrap();
	diesel::insert_into(playlists::table)
		.values(&playlist)
		.execute(&mut conn)
		.unwrap();
	playlist
}

pub fn seed_playlist_entry(pool: &DatabasePool, playlist: &Playlist, entry: &Music) {
	let mut conn = pool.get().unwrap();
	diesel::insert_into(playlist_music::table)
		.values((
			playlist_music::playlist_id.eq(&playlist.playlist_id),
			playlist_music::music_id.eq(&entry.music_id),
		))
		.execute(&mut conn)
		.unwrap();
}

pub fn seed_follower(pool: &DatabasePool, playlist: &Playlist, user: &User) {
	let mut conn = pool.get().unwrap();
	diesel::insert_into(playlist_followers::table)
		.values((
			playlist_followers::playlist_id.eq(&playlist.playlist_id),
			playlist_followers::user_id.eq(&user.user_id),
		))
		.execute(&mut conn)
		.unwrap();
}

// ----------------------------------------------------------------- state

pub fn user_count(pool: &DatabasePool, username: &str) -> usize {
	let mut conn = pool.get().unwrap();
	users::table
		.filter(users::username.eq(username))
		.load::<User>(&mut conn)
		.unwrap()
		.len()
}

pub fn find_user_row(pool: &DatabasePool, username: &str) -> Option<User> {
	let mut conn = pool.get().unwrap();
	users::table
		.filter(users::username.eq(username))
		.first::<User>(&mut conn)
		.optional()
		.unwrap()
}

pub fn playlist_exists(pool: &DatabasePool, playlist_id: &str) -> bool {
	let mut conn = pool.get().unwrap();
	playlists::table
		.find(playlist_id)
		.first::<Playlist>(&mut conn)
		.optional()
		.unwrap()
		.is_some()
}

pub fn follower_count(pool: &DatabasePool, playlist_id: &str) -> usize {
	let mut conn = pool.get().unwrap();
	playlist_followers::table
		.filter(playlist_followers::playlist_id.eq(playlist_id))
		.load::<(String, String)>(&mut conn)
		.unwrap()
		.len()
}

pub fn playlist_music_count(pool: &DatabasePool, playlist_id: &str) -> usize {
	let mut conn = pool.get().unwrap();
	playlist_music::table
		.filter(playlist_music::playlist_id.eq(playlist_id))
		.load::<(String, String)>(&mut conn)
		.unwrap()
		.len()
}

pub fn playlist_contains(pool: &DatabasePool, playlist_id: &str, music_id: &str) -> bool {
	let mut conn = pool.get().unwrap();
	playlist_music::table
		.filter(playlist_music::playlist_id.eq(playlist_id))
		.filter(playlist_music::music_id.eq(music_id))
		.load::<(String, String)>(&mut conn)
		.unwrap()
		.len() == 1
}

pub fn like_count(pool: &DatabasePool, music_id: &str) -> usize {
	let mut conn = pool.get().unwrap();
	music_likes::table
		.filter(music_likes::music_id.eq(music_id))
		.load::<(String, String)>(&mut conn)
		.unwrap()
		.len()
}

pub fn music_views(pool: &DatabasePool, music_id: &str) -> i32 {
	let mut conn = pool.get().unwrap();
	music::table
		.find(music_id)
		.select(music::number_of_views)
		.first::<i32>(&mut conn)
		.unwrap()
}
