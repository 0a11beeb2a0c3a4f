//! Status-report extraction: segmentation, field rules, normalization.

pub mod grammar;
pub mod normalizer;
pub mod parser;
pub mod rules;
pub mod segmenter;

pub use grammar::{BlockGrammar, GrammarContext};
pub use normalizer::normalize;
pub use parser::StatusReportParser;
pub use segmenter::{Block, BlockSegmenter};
