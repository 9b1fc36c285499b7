pub mod io;
pub mod ring;
