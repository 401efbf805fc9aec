pub(crate) mod cache;
pub(crate) mod config;
pub(crate) mod controller;
pub(crate) mod patch;
pub(crate) mod state;
