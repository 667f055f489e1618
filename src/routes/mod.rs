pub mod auth {
	pub mod login;
	pub mod signup;
}
pub mod browse {
	pub mod detail;
	pub mod top_albums;
	pub mod top_genres;
}
pub mod music {
	pub mod get_music;
	pub mod liked {
		pub mod get_liked_music;
		pub mod like_music;
	}
}
pub mod playlist {
	pub mod add_music_to_playlist;
	pub mod create_playlist;
	pub mod delete_playlist;
	pub mod follow_playlist;
	pub mod get_followed_playlists;
	pub mod get_user_playlists;
	pub mod top_playlists;
}
pub mod search;
