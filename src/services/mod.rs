pub mod anki_writer;
pub mod icon_paths;
pub mod image_fetcher;
pub mod latex_writer;
pub mod layout;
pub mod notation;

pub use anki_writer::AnkiWriter;
pub use icon_paths::IconPaths;
pub use image_fetcher::{DownloadJob, ImageFetcher};
pub use latex_writer::LatexWriter;
pub use layout::{paginate, PageLayout};
pub use notation::{escape_latex, to_latex};
