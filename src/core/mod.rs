pub mod dom;
pub mod errors;
pub mod helpers;
pub mod transport;
