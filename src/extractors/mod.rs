//! Request extractors.

mod base_url;
pub use base_url::{ApiBase, MountPrefix, FORWARDED_HOST_HEADER, FORWARDED_PROTO_HEADER};
