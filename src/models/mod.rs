pub mod match_record;
pub mod roster;
pub mod teams;
pub mod venue;
pub mod wizard;

pub use match_record::*;
pub use roster::*;
pub use teams::*;
pub use venue::*;
pub use wizard::*;
