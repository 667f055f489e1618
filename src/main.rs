use resona_backend::{
	config::{IP, PORT},
	core::{
		app_state::AppState,
		routes::configure_routes,
		server::{configure_cors, logger, start_server},
	},
	resona_db::db::run_migrations,
};

use dotenv::dotenv;

#[tokio::main]
async fn main() {
	dotenv().ok();
	tracing_subscriber::fmt().pretty().init();

	let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env file");
	run_migrations(&db_url);

	let app_state = AppState::new();

	let app = configure_routes(app_state)
		.layer(axum::middleware::from_fn(logger))
		.layer(configure_cors());

	start_server(app, IP, PORT).await;
}
