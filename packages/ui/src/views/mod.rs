mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod lister;
pub use lister::ListerView;

mod creator;
pub use creator::CreatorView;

mod updater;
pub use updater::UpdaterView;

mod remover;
pub use remover::RemoverView;

mod manager;
pub use manager::ManagerView;
