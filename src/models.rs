pub mod instance;
pub mod view;
