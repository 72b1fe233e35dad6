mod page_shell;
mod section;

pub use page_shell::PageShell;
pub use section::Section;
