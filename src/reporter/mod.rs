mod console;
mod export;
mod markdown;

pub use console::ConsoleReporter;
pub use export::{JsonExporter, HtmlExporter};
pub use markdown::MarkdownReporter;
