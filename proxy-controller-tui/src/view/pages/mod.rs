pub mod banner;
pub mod proxies;
