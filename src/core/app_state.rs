use crate::core::geo::{CountryResolver, MaxmindResolver};
use crate::resona_db::db::*;

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
	pub db_pool: DatabasePool,
	pub geo: Arc<dyn CountryResolver>,
}

impl AppState {
	pub fn new() -> AppState {
		let geoip_path = std::env::var("GEOIP_DB_PATH").expect("GEOIP_DB_PATH must be set in .env file");
		let resolver = MaxmindResolver::open(&geoip_path).expect("Failed to open the GeoIP database");

		AppState {
			db_pool: generate_db_pool(),
			geo: Arc::new(resolver),
		}
	}
}
