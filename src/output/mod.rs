mod csv_writer;
#[cfg(test)]
mod tests;

pub use csv_writer::{to_csv_string, write_csv};
