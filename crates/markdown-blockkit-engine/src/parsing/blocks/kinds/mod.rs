pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::ListMarker;
pub use paragraph::Paragraph;
pub use table::TableSyntax;
pub use thematic_break::ThematicBreak;
