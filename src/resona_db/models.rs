use crate::schema::*;

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Insertable, Queryable, Debug, Serialize, Deserialize, Selectable)]
#[diesel(table_name = users)]
pub struct User {
	pub user_id: String,
	pub username: String,
	pub email: String,
	pub pwd_hash: String,
}

/// Public shape of a user, stripped of the credential hash.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
	pub user_id: String,
	pub username: String,
	pub email: String,
}

impl From<User> for ProfileResponse {
	fn from(user: User) -> Self {
		ProfileResponse {
			user_id: user.user_id,
			username: user.username,
			email: user.email,
		}
	}
}

#[derive(Insertable, Queryable, Debug, Serialize, Deserialize, Selectable)]
#[diesel(table_name = music)]
pub struct Music {
	pub music_id: String,
	pub name: String,
	pub file_link: String,
	pub number_of_views: i32,
	pub album_id: Option<String>,
	pub genre_id: Option<String>,
}

/// Public shape of a music entry. The artist is the last credited performer.
#[derive(Debug, Serialize, Deserialize)]
pub struct MusicResponse {
	pub id: String,
	pub title: String,
	pub artist: String,
	pub mp3: String,
}

impl Music {
	pub fn to_response(self, db_conn: &mut SqliteConnection) -> QueryResult<MusicResponse> {
		let artist = music_performers::table
			.filter(music_performers::music_id.eq(&self.music_id))
			.inner_join(performers::table)
			.order(music_performers::position.desc())
			.select(performers::name)
			.first::<String>(db_conn)
			.optional()?;

		Ok(MusicResponse {
			id: self.music_id,
			title: self.name,
			artist: artist.unwrap_or_default(),
			mp3: self.file_link,
		})
	}

	pub fn to_responses(entries: Vec<Music>, db_conn: &mut SqliteConnection) -> QueryResult<Vec<MusicResponse>> {
		entries.into_iter().map(|entry| entry.to_response(db_conn)).collect()
	}
}

#[derive(Insertable, Queryable, Debug, Serialize, Deserialize, Selectable)]
#[diesel(table_name = playlists)]
pub struct Playlist {
	pub playlist_id: String,
	pub name: String,
	pub description: String,
	pub user_id: String,
	pub net_value: f64,
	pub creation_date_time: String,
	pub last_updated_date_time: String,
}

#[derive(Insertable, Queryable, Debug, Serialize, Deserialize, Selectable)]
#[diesel(table_name = albums)]
pub struct Album {
	pub album_id: String,
	pub name: String,
	pub description: String,
	pub net_value: f64,
}

#[derive(Insertable, Queryable, Debug, Serialize, Deserialize, Selectable)]
#[diesel(table_name = genres)]
pub struct Genre {
	pub genre_id: String,
	pub genre_name: String,
	pub description: String,
}

#[derive(Insertable, Queryable, Debug, Serialize, Deserialize, Selectable)]
#[diesel(table_name = charts)]
pub struct Chart {
	pub chart_id: String,
	pub name: String,
	pub description: String,
}

#[derive(Insertable, Queryable, Debug, Serialize, Deserialize, Selectable)]
#[diesel(table_name = performers)]
pub struct Performer {
	pub performer_id: String,
	pub name: String,
	pub description: String,
}
