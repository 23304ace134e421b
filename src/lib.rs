pub mod data_url;
pub mod error;
pub mod image;
pub mod types;

// Re-export commonly used functions
pub use self::image::{
    SampleGrid, Tile, TileLayout, Tiles, collapse_alpha, image_data_mode, normalize_to_uint8,
    tiles, to_dynamic_image,
};
pub use data_url::data_url;
pub use error::{Error, Result};
pub use types::{ColorMode, Range};
