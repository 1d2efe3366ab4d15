mod access_token;
mod error_location;
