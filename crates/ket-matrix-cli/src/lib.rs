//! Job-file driven front end for the `ket-matrix` library.
pub mod amplitude;
pub mod matrix;
pub mod util;
