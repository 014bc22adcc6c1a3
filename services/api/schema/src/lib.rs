//! sea-orm entities for the foodcart API service.

pub mod accounts;
pub mod menu_items;
pub mod vendors;
