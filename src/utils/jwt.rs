use jsonwebtoken::{decode, encode, errors::Result, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
	pub id: String,
	pub exp: usize,
}

pub fn generate(user_id: &str, exp: usize, secret_key: &str) -> Result<String> {
	let claims = Claims {
		id: user_id.to_string(),
		exp,
	};
	encode(&Header::default(), &claims, &EncodingKey::from_secret(secret_key.as_bytes()))
}

pub fn verify(token: &str, secret_key: &str) -> Result<Claims> {
	decode::<Claims>(
		token,
		&DecodingKey::from_secret(secret_key.as_bytes()),
		&Validation::new(Algorithm::HS256),
	)
	.map(|data| data.claims)
}
