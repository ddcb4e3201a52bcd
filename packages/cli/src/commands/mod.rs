pub mod catalog;
pub mod compile;
pub mod init;
pub mod new;
pub mod source;
pub mod templates;

pub use catalog::{fonts, presets, PresetsArgs};
pub use compile::{compile, CompileArgs};
pub use init::{init, InitArgs};
pub use new::{new_template, NewArgs};
pub use templates::{templates, TemplatesCommand};
