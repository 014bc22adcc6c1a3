//! Bearer-token types shared between issuance (login/registration) and
//! validation (the authenticated route extractor).

pub mod identity;
pub mod token;
