mod content;

pub use content::ContentInput;
