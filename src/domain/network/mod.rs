pub mod allotment;
pub mod builder;
pub mod host;
pub mod id;
pub mod link;
pub mod network;
pub mod path;
pub mod path_finder;
pub mod switch;
