pub mod classify;
pub mod extraction;
pub mod history;
pub mod processor;
pub mod reference;
pub mod sample;
