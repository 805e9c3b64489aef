pub mod icons;
pub mod output;
pub mod palette;
pub mod table;

pub use icons::Icons;
pub use output::{dim, error, info, not_found, success};
pub use palette::{palette, Palette};
pub use table::{record_table, RecordRow};
