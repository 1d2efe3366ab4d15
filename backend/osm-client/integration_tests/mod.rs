mod dispatcher;
mod endpoints;
mod error;
mod helpers;
