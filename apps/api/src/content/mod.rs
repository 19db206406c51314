pub mod clock;
pub mod composer;
pub mod locale;
pub mod packages;
pub mod polish;
pub mod prompts;
pub mod selector;
pub mod tables;
pub mod weekly;
