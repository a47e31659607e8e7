pub mod document_loader;
pub mod file_picker;
pub mod json_writer;
pub mod xlsx_writer;

pub use document_loader::load_document;
pub use file_picker::FilePicker;
pub use json_writer::JsonWriter;
pub use xlsx_writer::{SheetWriter, COLUMN_HEADERS};
