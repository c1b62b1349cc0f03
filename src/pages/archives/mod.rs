//! Master-data pages under `/archives`.

pub mod assets;
pub mod collection;
pub mod sectors;
pub mod spare_parts;
pub mod suppliers;
pub mod tools;
pub mod workers;
