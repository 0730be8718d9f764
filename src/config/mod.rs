pub mod bindings;
pub mod settings;
