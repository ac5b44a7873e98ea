pub mod controller;
pub mod params;
pub mod surfaces;
pub mod view;

#[cfg(test)]
pub(crate) mod testkit;

pub use controller::*;
pub use params::*;
pub use surfaces::*;
pub use view::*;
