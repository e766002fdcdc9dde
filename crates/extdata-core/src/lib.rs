pub mod coerce;
pub mod io;
pub mod shape;
