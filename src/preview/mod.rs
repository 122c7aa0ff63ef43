pub(crate) mod cache;
pub(crate) mod controller;
pub(crate) mod scheduler;
pub(crate) mod session;
