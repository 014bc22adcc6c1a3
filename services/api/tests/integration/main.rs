
mod auth_test;
mod menu_test;
mod vendor_test;
