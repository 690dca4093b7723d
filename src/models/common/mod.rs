pub mod lookup;
pub mod params;
pub mod response;
