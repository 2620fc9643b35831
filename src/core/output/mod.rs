//! Output writing.
//!
//! Output is the filtered lines followed by any summary lines, written
//! verbatim with one `\n` per line.
//!
//! - [`write_lines`] - write to any [`std::io::Write`]
//! - [`write_output`] - create or truncate a file and write to it
//! - [`to_text`] - render to a `String`
//! - [`resolve_output_path`] - relative output paths resolve against the input directory
//!
//! # Example
//!
//! ```rust
//! use log_analyzer::core::output::{resolve_output_path, to_text};
//! use std::path::Path;
//!
//! let lines = vec!["alice,01.01.2020 at 10:00:00,hello".to_string()];
//! assert_eq!(to_text(&lines), "alice,01.01.2020 at 10:00:00,hello\n");
//!
//! let path = resolve_output_path(Path::new("/var/logs"), Path::new("out.log"));
//! assert_eq!(path, Path::new("/var/logs/out.log"));
//! ```

mod text_writer;

pub use text_writer::{resolve_output_path, to_text, write_lines, write_output};
