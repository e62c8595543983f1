//! # distance-client
//!
//! Resolves the rail distance between a list of origin stations and a destination by querying the
//! route page and reading the first `span.dist` element of the returned HTML.
//!
//! [`DistanceResolver`] never fails: network and extraction problems are logged and turned into
//! the fixed user-facing texts [`REQUEST_FAILED_TEXT`] and [`DISTANCE_NOT_FOUND_TEXT`].

mod error;
mod extract;
mod resolver;

pub use error::LookupError;
pub use extract::{extract_distance, DISTANCE_SELECTOR};
pub use resolver::{DistanceResolver, HttpDistanceResolver, DEFAULT_DISTANCE_URL};

/// Returned when the route page cannot be fetched.
pub const REQUEST_FAILED_TEXT: &str = "Ошибка при запросе к веб-странице";

/// Returned when the page has no distance element.
pub const DISTANCE_NOT_FOUND_TEXT: &str = "Расстояние не найдено";
