use crate::config::{ALLOWED_COUNTRIES, DISALLOWED_COUNTRY_ROUTE};
use crate::core::app_state::AppState;

use axum::{
	extract::{ConnectInfo, Request, State},
	http::HeaderMap,
	middleware::Next,
	response::{IntoResponse, Redirect, Response},
};
use maxminddb::geoip2;
use std::net::{IpAddr, SocketAddr};

/// Maps a client address to an English country name.
pub trait CountryResolver: Send + Sync {
	fn country_name(&self, ip: IpAddr) -> Option<String>;
}

pub struct MaxmindResolver {
	reader: maxminddb::Reader<Vec<u8>>,
}

impl MaxmindResolver {
	pub fn open(path: &str) -> Result<MaxmindResolver, maxminddb::MaxMindDBError> {
		Ok(MaxmindResolver {
			reader: maxminddb::Reader::open_readfile(path)?,
		})
	}
}

impl CountryResolver for MaxmindResolver {
	fn country_name(&self, ip: IpAddr) -> Option<String> {
		let country: geoip2::Country = self.reader.lookup(ip).ok()?;
		country
			.country
			.and_then(|c| c.names)
			.and_then(|names| names.get("en").map(|name| (*name).to_string()))
	}
}

/// The apparent client address: first X-Forwarded-For entry when the header
/// is present (a junk entry resolves to nothing, the peer address is NOT
/// consulted as a fallback), otherwise the peer address of the connection.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<IpAddr> {
	if let Some(forwarded) = headers.get("x-forwarded-for") {
		return forwarded.to_str().ok()?.split(',').next()?.trim().parse().ok();
	}
	peer.map(|addr| addr.ip())
}

/// Gate in front of the registration routes. Requests whose country cannot
/// be resolved are treated the same as requests from a disallowed country.
pub async fn country_gate(State(app_state): State<AppState>, request: Request, next: Next) -> Response {
	let peer = request
		.extensions()
		.get::<ConnectInfo<SocketAddr>>()
		.map(|info| info.0);

	let country = client_ip(request.headers(), peer).and_then(|ip| app_state.geo.country_name(ip));

	match country {
		Some(name) if ALLOWED_COUNTRIES.contains(&name.as_str()) => next.run(request).await,
		_ => Redirect::to(DISALLOWED_COUNTRY_ROUTE).into_response(),
	}
}
