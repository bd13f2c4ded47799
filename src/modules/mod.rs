pub mod barcode;
pub mod health;
pub mod student;

mod router;
pub use router::get_router;
