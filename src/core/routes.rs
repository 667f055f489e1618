use crate::{
	config::DISALLOWED_COUNTRY_ROUTE,
	core::{app_state::AppState, auth::require_auth, geo::country_gate},
	routes::{
		auth::{
			login::login,
			signup::{disallowed_country, signup, signup_form},
		},
		browse::{
			detail::{album_detail, genre_detail, playlist_detail},
			top_albums::top_albums,
			top_genres::top_genres,
		},
		music::{
			get_music::get_music,
			liked::{get_liked_music::get_liked_music, like_music::like_music},
		},
		playlist::{
			add_music_to_playlist::add_music_to_playlist, create_playlist::create_playlist,
			delete_playlist::delete_playlist, follow_playlist::follow_playlist,
			get_followed_playlists::get_followed_playlists, get_user_playlists::get_user_playlists,
			top_playlists::top_playlists,
		},
		search::search,
	},
};
use axum::{
	middleware,
	routing::{get, post},
	Router,
};

pub fn configure_routes(app_state: AppState) -> Router {
	// Registration dispatch is gated on the resolved country before any
	// form processing happens, GET and POST alike.
	let signup_routes = Router::new()
		.route("/signup", get(signup_form).post(signup))
		.route_layer(middleware::from_fn_with_state(app_state.clone(), country_gate));

	let public = Router::new()
		.route("/", get(index))
		.route("/login", post(login))
		.route(DISALLOWED_COUNTRY_ROUTE, get(disallowed_country))
		.merge(signup_routes);

	let api = Router::new()
		//music
		.route("/music", get(get_music))
		.route("/music/liked", get(get_liked_music))
		.route("/music/like", post(like_music))
		//playlist stuff
		.route("/playlists/create", post(create_playlist))
		.route("/playlists/delete", post(delete_playlist))
		.route("/playlists/detail", post(playlist_detail))
		.route("/playlists/top", post(top_playlists))
		.route("/playlists/mine", get(get_user_playlists))
		.route("/playlists/follow", post(follow_playlist))
		.route("/playlists/followed", get(get_followed_playlists))
		.route("/playlists/add-music", post(add_music_to_playlist))
		//browse
		.route("/albums/detail", post(album_detail))
		.route("/albums/top", get(top_albums))
		.route("/genres/detail", post(genre_detail))
		.route("/genres/top", post(top_genres))
		//search
		.route("/search", post(search))
		.route_layer(middleware::from_fn_with_state(app_state.clone(), require_auth));

	public.merge(api).with_state(app_state)
}

async fn index() -> String {
	"Hello from Resona backend".to_string()
}
