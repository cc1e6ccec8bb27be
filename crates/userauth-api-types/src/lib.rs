#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod request;

pub mod response;

/// Path of the credential-checking endpoint, relative to the service root.
pub const USERS_PATH: &str = "/users/";
