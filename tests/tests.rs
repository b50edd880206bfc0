#[cfg(feature = "server")]
mod controller;

#[cfg(feature = "server")]
mod util;
