//! sea-orm entities for the marketplace database.

pub mod adverts;
pub mod image_data;
pub mod users;
pub mod viewed_adverts;
