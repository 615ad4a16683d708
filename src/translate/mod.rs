pub mod interface;
pub mod client;
pub mod factory;

pub use interface::{TranslateError, TranslatorInterface};
pub use client::HttpTranslator;
pub use factory::TranslatorFactory;
