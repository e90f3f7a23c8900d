pub mod date;
pub mod encoded_image;
pub mod state;

pub use date::Date;
pub use encoded_image::{EncodedImage, EncodedImageError};
pub use state::{RawResultState, ResultState, ResultStateTag};
