// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::movie::{ExportConfig, TiffCompression, TiffPredictor};

#[derive(Parser, Debug, Clone)]
#[command(name = "rawmovie")]
#[command(about = "Inspect .rawm/.raw movies and export frames", long_about = None)]
pub struct Cli {
    /// Path to the .rawm metadata file
    pub metadata: PathBuf,

    /// Check the payload size only after decoding it
    #[arg(long = "lazy-size-check", default_value = "false")]
    pub lazy_size_check: bool,

    /// Export this frame as a TIFF image
    #[arg(long = "export-frame", requires = "output")]
    pub export_frame: Option<usize>,

    /// Output path for the exported frame
    #[arg(short, long, requires = "export_frame")]
    pub output: Option<PathBuf>,

    /// TIFF compression of the exported frame
    #[arg(long, value_enum, default_value_t = CompressionArg::None)]
    pub compression: CompressionArg,

    /// Use horizontal differencing before compression
    #[arg(long, default_value = "false")]
    pub predictor: bool,
}

impl Cli {
    pub fn export_config(&self) -> ExportConfig {
        let predictor = if self.predictor {
            TiffPredictor::Horizontal
        } else {
            TiffPredictor::None
        };
        ExportConfig::default()
            .with_compression(self.compression.into())
            .with_predictor(predictor)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionArg {
    None,
    Lzw,
    DeflateFast,
    DeflateBalanced,
    DeflateBest,
}

impl From<CompressionArg> for TiffCompression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => TiffCompression::None,
            CompressionArg::Lzw => TiffCompression::Lzw,
            CompressionArg::DeflateFast => TiffCompression::DeflateFast,
            CompressionArg::DeflateBalanced => TiffCompression::DeflateBalanced,
            CompressionArg::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_only() {
        let cli = Cli::try_parse_from(["rawmovie", "movie.rawm"]).unwrap();
        assert_eq!(cli.metadata, PathBuf::from("movie.rawm"));
        assert_eq!(cli.export_frame, None);
        assert!(!cli.lazy_size_check);
        assert_eq!(cli.compression, CompressionArg::None);
        assert_eq!(cli.export_config(), ExportConfig::default());
    }

    #[test]
    fn test_export_arguments() {
        let cli = Cli::try_parse_from([
            "rawmovie", "movie.rawm", "--export-frame", "3", "-o", "f.tiff",
            "--compression", "deflate-best", "--predictor",
        ])
        .unwrap();
        assert_eq!(cli.export_frame, Some(3));
        assert_eq!(cli.output, Some(PathBuf::from("f.tiff")));
        assert_eq!(TiffCompression::from(cli.compression), TiffCompression::DeflateBest);
        assert!(cli.predictor);

        let config = cli.export_config();
        assert_eq!(config.compression, TiffCompression::DeflateBest);
        assert_eq!(config.predictor, TiffPredictor::Horizontal);
    }

    #[test]
    fn test_export_requires_output() {
        assert!(Cli::try_parse_from(["rawmovie", "movie.rawm", "--export-frame", "0"]).is_err());
    }
}
