pub mod part;
pub mod question;

pub use part::Part;
pub use question::QuestionRecord;
