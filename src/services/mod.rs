pub mod api;
pub mod url_codec;
