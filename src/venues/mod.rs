pub mod board;
pub mod day_names;
pub mod scraped;
pub mod venue;
pub mod venue_store;
