//! Collaborator traits

mod presenter;

pub use presenter::{LoggingPresenter, Presenter};
