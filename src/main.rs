//! # img-compare CLI
//!
//! Command-line interface for the image similarity tool.
//!
//! ## Usage
//! ```bash
//! img-compare photo1.jpg photo2.jpg
//! img-compare photo1.jpg photo2.jpg --hash-size 16 --output json
//! ```

mod cli;

use image_similarity::Result;

fn main() -> Result<()> {
    image_similarity::init_tracing();
    cli::run()
}
