mod shell;
pub use shell::AppShell;

mod screens;
pub use screens::{Creator, Lister, Manager, Remover, Updater};
