mod crawler_concurrent;
mod crawler_sequential;
mod fetcher_http;
mod persister_yaml;

pub use crawler_concurrent::*;
pub use crawler_sequential::*;
pub use fetcher_http::*;
pub use persister_yaml::*;
