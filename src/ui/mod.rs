pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, diagnostic, diagnostics, header, section, status, success, summary_row};
pub use table::{binding_table, TableBuilder};
pub use theme::{theme, Theme};
