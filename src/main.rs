use clap::Parser;
use rawmovie_rs::cli::Cli;
use rawmovie_rs::logger;
use rawmovie_rs::movie::{
    MovieReader, ReaderConfig, TiffFrameWriter, TimestampStats,
};

use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    logger::init();
    let cli = Cli::parse();

    let config = ReaderConfig::builder()
        .validate_payload_size(!cli.lazy_size_check)
        .build();
    let reader = MovieReader::new(config);

    let movie = reader.load(&cli.metadata)?;
    let header = &movie.metadata.header;

    info!("Movie: {}", cli.metadata.display());
    if let Some(app) = &header.app_name {
        info!("Recorded with {} {}", app, header.version.as_deref().unwrap_or("?"));
    }
    if let Some(name) = header.camera.as_ref().and_then(|c| c.device_name.as_deref()) {
        info!("Camera: {}", name);
    }
    info!("Geometry: {}x{}", header.width, header.height);
    info!(
        "Pixel format: {} ({} bits, {} byte samples, {} endian)",
        header.pixel_format,
        header.pixel_format.bit_depth(),
        header.pixel_format.sample_bytes(),
        header.endianness
    );
    info!("Frames: {}", movie.frames.n_frames());

    if let Some(stats) = TimestampStats::from_timestamps(&movie.timestamps) {
        info!("Duration: {:.3} s", stats.duration().as_secs_f64());
        if let Some(rate) = stats.frame_rate() {
            info!("Mean frame rate: {:.2} Hz", rate);
        }
        if !stats.is_monotonic() {
            warn!("{} timestamps go backwards", stats.non_monotonic);
        }
    }

    if let (Some(index), Some(output)) = (cli.export_frame, cli.output.as_ref()) {
        movie.write_frame(index, output, &TiffFrameWriter, &cli.export_config())?;
    }

    Ok(())
}
