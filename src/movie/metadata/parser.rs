//! `.rawm` document parser.

use std::path::Path;
use std::str::FromStr;

use roxmltree::{Document, Node};
use tracing::{debug, instrument, warn};

use crate::movie::common::error::{MovieError, Result};
use crate::movie::metadata::types::{
    CameraInfo, Endianness, FrameRecord, MovieHeader, MovieMetadata, PixelFormat,
};
use crate::movie::metadata::xml::{
    child, children, optional_text, required_attribute, required_child, required_literal,
    required_text,
};

/// Root element of every metadata document.
pub const ROOT_TAG: &str = "movie_metadata";

/// Reads and parses the metadata document at `path`.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_metadata<P: AsRef<Path>>(path: P) -> Result<MovieMetadata> {
    // The handle is closed before parsing starts.
    let bytes = std::fs::read(path.as_ref()).map_err(MovieError::input_read(path.as_ref()))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| MovieError::MalformedDocument(e.to_string()))?;
    parse_metadata(&text)
}

/// Parses a metadata document held in memory.
pub fn parse_metadata(text: &str) -> Result<MovieMetadata> {
    let doc = Document::parse(text).map_err(|e| MovieError::MalformedDocument(e.to_string()))?;

    let root = doc.root_element();
    if !root.has_tag_name(ROOT_TAG) {
        return Err(MovieError::MissingElement(ROOT_TAG.to_string()));
    }

    let header = parse_header(root)?;
    let frames = parse_frames(root)?;

    debug!(
        width = header.width,
        height = header.height,
        pixel_format = %header.pixel_format,
        endianness = %header.endianness,
        n_frames = frames.len(),
        "Parsed movie metadata"
    );

    Ok(MovieMetadata { header, frames })
}

fn parse_header(root: Node<'_, '_>) -> Result<MovieHeader> {
    let header = required_child(root, "header")?;

    let width = parse_dimension(header, "width")?;
    let height = parse_dimension(header, "height")?;
    let pixel_format = PixelFormat::from_str(required_literal(header, "pixel_format")?)?;
    let endianness = Endianness::from_str(required_literal(header, "endianness")?)?;

    Ok(MovieHeader {
        width,
        height,
        pixel_format,
        endianness,
        app_name: root.attribute("app_name").map(str::to_string),
        version: root.attribute("version").map(str::to_string),
        target_version: root.attribute("target_version").map(str::to_string),
        camera: child(header, "camera").map(parse_camera),
        api_version: optional_text(header, "api_version"),
        driver_version: optional_text(header, "driver_version"),
        offset_x: optional_number(header, "offset_x"),
        offset_y: optional_number(header, "offset_y"),
        framerate: optional_number(header, "framerate"),
        exposure: optional_number(header, "exposure"),
        gain: optional_number(header, "gain"),
    })
}

fn parse_dimension(header: Node<'_, '_>, name: &str) -> Result<usize> {
    let raw = required_text(header, name)?;
    match raw.parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(MovieError::invalid(name, raw)),
    }
}

fn parse_camera(camera: Node<'_, '_>) -> CameraInfo {
    CameraInfo {
        device_name: optional_text(camera, "device_name"),
        model_id: optional_text(camera, "model_id"),
        device_sn: optional_text(camera, "device_sn"),
        mcu1_firmware_version: optional_text(camera, "mcu1_firmware_version"),
        fpga1_firmware_version: optional_text(camera, "fpga1_firmware_version"),
        hardware_revision: optional_text(camera, "hardware_revision"),
    }
}

/// Descriptive header field; an unparseable value is logged and dropped.
fn optional_number<T: FromStr>(header: Node<'_, '_>, name: &str) -> Option<T> {
    let raw = optional_text(header, name)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(field = name, value = %raw, "Ignoring unparseable header field");
            None
        }
    }
}

fn parse_frames(root: Node<'_, '_>) -> Result<Vec<FrameRecord>> {
    let frames = required_child(root, "frames")?;

    children(frames, "frame")
        .enumerate()
        .map(|(i, frame)| -> Result<FrameRecord> {
            let label = format!("frame[{i}]");
            let raw = required_attribute(frame, "timestamp", &label)?;
            let timestamp = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| MovieError::invalid("timestamp", raw))?;
            let frame_number = frame.attribute("frame").and_then(|n| n.trim().parse().ok());
            Ok(FrameRecord {
                timestamp,
                frame_number,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(header: &str, frames: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
             <movie_metadata app_name=\"xiFastMovie\" version=\"1.4\">\n\
             <header>{header}</header>\n<frames>{frames}</frames>\n</movie_metadata>\n"
        )
    }

    const HEADER: &str = "<width>4</width><height>3</height>\
                          <pixel_format>Mono12</pixel_format><endianness>big</endianness>";

    #[test]
    fn test_parse_minimal_document() {
        let text = document(HEADER, r#"<frame timestamp="10"/><frame timestamp="20"/>"#);
        let meta = parse_metadata(&text).unwrap();

        assert_eq!(meta.header.width, 4);
        assert_eq!(meta.header.height, 3);
        assert_eq!(meta.header.pixel_format, PixelFormat::Mono12);
        assert_eq!(meta.header.endianness, Endianness::Big);
        assert_eq!(meta.timestamps(), vec![10, 20]);
        assert_eq!(meta.shape(), (2, 3, 4));
        assert_eq!(meta.header.app_name.as_deref(), Some("xiFastMovie"));
        assert_eq!(meta.header.camera, None);
    }

    #[test]
    fn test_parse_recorder_header_fields() {
        let header = format!(
            "<camera><device_name>MQ013MG-ON</device_name><device_sn>123</device_sn></camera>\
             <api_version>4.10</api_version><offset_x>8</offset_x><offset_y>-</offset_y>\
             {HEADER}<framerate>250.5</framerate><exposure>1000</exposure><gain>0</gain>"
        );
        let text = document(&header, r#"<frame frame="7" timestamp="1000"/>"#);
        let meta = parse_metadata(&text).unwrap();

        let camera = meta.header.camera.unwrap();
        assert_eq!(camera.device_name.as_deref(), Some("MQ013MG-ON"));
        assert_eq!(camera.device_sn.as_deref(), Some("123"));
        assert_eq!(camera.model_id, None);
        assert_eq!(meta.header.api_version.as_deref(), Some("4.10"));
        assert_eq!(meta.header.offset_x, Some(8));
        assert_eq!(meta.header.offset_y, None);
        assert_eq!(meta.header.framerate, Some(250.5));
        assert_eq!(meta.header.exposure, Some(1000));
        assert_eq!(meta.header.gain, Some(0.0));
        assert_eq!(meta.frames[0].frame_number, Some(7));
    }

    #[test]
    fn test_wrong_root() {
        let err = parse_metadata("<movie><header/></movie>").unwrap_err();
        assert!(matches!(err, MovieError::MissingElement(ref n) if n == ROOT_TAG));
    }

    #[test]
    fn test_not_xml() {
        let err = parse_metadata("width=4").unwrap_err();
        assert!(matches!(err, MovieError::MalformedDocument(_)));
    }

    #[test]
    fn test_missing_frames() {
        let text = format!("<movie_metadata><header>{HEADER}</header></movie_metadata>");
        let err = parse_metadata(&text).unwrap_err();
        assert!(matches!(err, MovieError::MissingElement(ref n) if n == "frames"));
    }

    #[test]
    fn test_non_numeric_height() {
        let header = HEADER.replace("<height>3</height>", "<height>three</height>");
        let err = parse_metadata(&document(&header, "")).unwrap_err();
        assert!(matches!(
            err,
            MovieError::InvalidValue { ref field, ref value } if field == "height" && value == "three"
        ));
    }

    #[test]
    fn test_zero_width_rejected() {
        let header = HEADER.replace("<width>4</width>", "<width>0</width>");
        let err = parse_metadata(&document(&header, "")).unwrap_err();
        assert!(matches!(err, MovieError::InvalidValue { ref field, .. } if field == "width"));
    }

    #[test]
    fn test_unknown_endianness() {
        let header = HEADER.replace("big", "middle");
        let err = parse_metadata(&document(&header, "")).unwrap_err();
        assert!(matches!(
            err,
            MovieError::InvalidValue { ref field, ref value } if field == "endianness" && value == "middle"
        ));
    }

    #[test]
    fn test_padded_enum_values_rejected() {
        let cases = [
            ("<pixel_format>Mono12</pixel_format>", "<pixel_format>\n  Mono12 \n</pixel_format>", "pixel_format", "\n  Mono12 \n"),
            ("<endianness>big</endianness>", "<endianness> big\t</endianness>", "endianness", " big\t"),
        ];
        for (original, padded, field_name, raw) in cases {
            let header = HEADER.replace(original, padded);
            let err = parse_metadata(&document(&header, "")).unwrap_err();
            assert!(
                matches!(
                    err,
                    MovieError::InvalidValue { ref field, ref value } if field == field_name && value == raw
                ),
                "{field_name}: {err}"
            );
        }
    }

    #[test]
    fn test_padded_numbers_accepted() {
        let header = HEADER
            .replace("<width>4</width>", "<width> 4\n</width>")
            .replace("<height>3</height>", "<height>\t3 </height>");
        let text = document(&header, r#"<frame timestamp=" 10 "/>"#);
        let meta = parse_metadata(&text).unwrap();
        assert_eq!(meta.shape(), (1, 3, 4));
        assert_eq!(meta.timestamps(), vec![10]);
    }

    #[test]
    fn test_bad_timestamp() {
        let text = document(HEADER, r#"<frame timestamp="-5"/>"#);
        let err = parse_metadata(&text).unwrap_err();
        assert!(matches!(err, MovieError::InvalidValue { ref field, .. } if field == "timestamp"));
    }

    #[test]
    fn test_empty_frame_list() {
        let meta = parse_metadata(&document(HEADER, "")).unwrap();
        assert_eq!(meta.n_frames(), 0);
        assert_eq!(meta.expected_samples(), Some(0));
    }

    #[test]
    fn test_byte_widths() {
        assert_eq!(PixelFormat::Mono8.sample_bytes(), 1);
        for format in [PixelFormat::Mono10, PixelFormat::Mono12, PixelFormat::Mono14, PixelFormat::Mono16] {
            assert_eq!(format.sample_bytes(), 2);
        }
    }
}
