pub mod break_record;
pub mod break_status;

pub use break_record::BreakRecord;
pub use break_status::BreakStatus;
