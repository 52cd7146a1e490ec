pub mod db;
pub mod oauth2;
pub mod password;
