use crate::resona_db::models::User;
use crate::schema::users;

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub type DatabasePool = Pool<ConnectionManager<SqliteConnection>>;

// Embedded so the binary carries its own schema
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub fn run_migrations(db_url: &str) {
	let mut conn = SqliteConnection::establish(db_url).expect("Failed to connect to the database");

	conn.run_pending_migrations(MIGRATIONS)
		.expect("Failed to run migrations");
}

pub fn generate_db_pool() -> DatabasePool {
	let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env file");
	pool_from_url(&database_url)
}

pub fn pool_from_url(database_url: &str) -> DatabasePool {
	let manager = ConnectionManager::<SqliteConnection>::new(database_url);
	Pool::builder()
		.max_size(5)
		.build(manager)
		.expect("Failed to create pool")
}

pub fn find_user(id: &str, db_pool: &DatabasePool) -> Option<User> {
	let mut db_conn = match db_pool.get() {
		Ok(conn) => conn,
		Err(_) => {
			tracing::warn!("[find_user]: Cannot get database through pool");
			return None;
		}
	};

	users::table
		.filter(users::user_id.eq(id))
		.first::<User>(&mut db_conn)
		.ok()
}

pub fn username_taken(name: &str, db_conn: &mut SqliteConnection) -> bool {
	users::table
		.filter(users::username.eq(name))
		.first::<User>(db_conn)
		.is_ok()
}

pub fn email_taken(address: &str, db_conn: &mut SqliteConnection) -> bool {
	users::table
		.filter(users::email.eq(address))
		.first::<User>(db_conn)
		.is_ok()
}
