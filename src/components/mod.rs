//! UI Components for the Chesed Machine.

mod header;
mod idea_card;
mod idea_generator;
mod ideas_counter;
mod share_modal;
mod toast;
mod welcome_modal;

pub use header::Header;
pub use idea_card::IdeaCard;
pub use idea_generator::IdeaGenerator;
pub use ideas_counter::IdeasCounter;
pub use share_modal::ShareModal;
pub use toast::{notify, ToastKind, ToastStack, Toasts};
pub use welcome_modal::{FirstVisitWelcome, WelcomeModal};
