pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::describe_status;
pub use formatting::time_ago;
