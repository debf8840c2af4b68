//! Tagcloud - word-frequency tag clouds from plain text.
//!
//! The pipeline runs in four stages, each consuming the previous stage's
//! output and producing a new value:
//!
//! 1. [`tokenizer`] splits raw text into lowercase tokens.
//! 2. [`counter`] folds the tokens into a [`FrequencyTable`](counter::FrequencyTable).
//! 3. [`selector`] keeps the most frequent words and orders them alphabetically.
//! 4. [`scaler`] maps every selected count to a font size.
//!
//! [`render`] turns the result into markup; the command-line binary wraps it
//! in a page and writes it to disk.
//!
//! ```rust
//! use tagcloud::prelude::*;
//!
//! let cloud = generate("The cat sat. The cat ran!", 2);
//! let words: Vec<&str> = cloud.entries.iter().map(|e| e.word.as_str()).collect();
//! assert_eq!(words, vec!["cat", "the"]);
//! assert!(cloud.entries.iter().all(|e| e.font_size == 16));
//! ```

pub mod types;
pub mod error;
pub mod config;
pub mod tokenizer;
pub mod counter;
pub mod selector;
pub mod scaler;
pub mod engine;
pub mod render;

pub use engine::generate;

pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::types::*;
    pub use crate::error::*;
    pub use crate::config::*;
    pub use crate::counter::FrequencyTable;
    pub use crate::selector::select;
    pub use crate::scaler::FontScale;
    pub use crate::engine::*;
    pub use crate::render::*;
}
