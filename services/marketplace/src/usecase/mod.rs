pub mod advert_registration;
pub mod advert_search;
pub mod advert_view;
pub mod image;
pub mod login;
pub mod oauth2;
