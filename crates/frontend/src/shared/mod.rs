pub mod assets;
pub mod categories;
pub mod components;
pub mod icons;
pub mod meta;
pub mod url_state;
