pub mod chunker;
pub mod loader;
pub mod scanner;
pub mod splitter;

pub use chunker::DocumentChunker;
pub use loader::{LopdfLoader, PdfLoader};
pub use scanner::PdfScanner;
pub use splitter::{RecursiveCharacterSplitter, TextSplitter};
