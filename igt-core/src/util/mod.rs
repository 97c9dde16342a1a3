pub mod format;
pub mod sort;
pub mod validate;
pub mod whatsapp;
