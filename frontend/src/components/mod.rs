pub mod dashboard;
pub mod header;
pub mod layout;
pub mod login;
pub mod properties;
pub mod protected;
