// SPDX-License-Identifier: MPL-2.0

//! GStreamer camera backend
//!
//! Cameras are discovered with a `DeviceMonitor` on `Video/Source`, which
//! covers PipeWire, libcamera and V4L2 providers alike. The chosen device's
//! source element feeds
//!
//! ```text
//! source ! [capsfilter W x H] ! decodebin ! videoconvert ! video/x-raw,format=RGBA ! appsink
//! ```
//!
//! The capsfilter is only inserted when the device advertises the requested
//! size. Otherwise the source runs in its native mode, and frames are never
//! rescaled. Every sample is copied into a tightly packed [`CameraFrame`]
//! that carries the negotiated size.

use super::types::*;
use super::{CameraBackend, CameraBackendType};
use crate::constants::pipeline;
use crate::errors::CameraError;
use gstreamer::prelude::*;
use gstreamer_app::AppSink;
use gstreamer_video::VideoInfo;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, error, info, warn};

static FRAME_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Device properties that may carry the camera location, in lookup order
const LOCATION_KEYS: [&str; 2] = ["api.libcamera.location", "camera.location"];

/// Device properties that may carry a stable identifier, in lookup order
const PATH_KEYS: [&str; 3] = ["object.serial", "api.v4l2.path", "device.path"];

/// GStreamer-based camera backend
#[derive(Debug, Default)]
pub struct GStreamerBackend;

impl GStreamerBackend {
    pub fn new() -> Self {
        Self
    }
}

impl CameraBackend for GStreamerBackend {
    fn enumerate_cameras(&self) -> Vec<CameraDevice> {
        match discover_devices() {
            Ok(found) => found.into_iter().map(|(device, _)| device).collect(),
            Err(e) => {
                warn!(error = %e, "Camera enumeration failed");
                Vec::new()
            }
        }
    }

    fn request_stream(&self, constraints: &StreamConstraints) -> Result<CameraStream, CameraError> {
        let found = discover_devices()?;
        let devices: Vec<CameraDevice> = found.iter().map(|(d, _)| d.clone()).collect();
        let chosen = select_device(&devices, constraints.facing).ok_or(CameraError::NoCameraFound)?;
        let gst_device = found
            .iter()
            .find(|(d, _)| d == chosen)
            .map(|(_, g)| g.clone())
            .ok_or(CameraError::NoCameraFound)?;

        let (width, height) = (constraints.width, constraints.height);
        let preferred = supports_size(&gst_device, width, height).then_some((width, height));
        info!(
            device = %chosen.name,
            location = ?chosen.camera_location,
            width,
            height,
            native = preferred.is_none(),
            "Opening camera"
        );

        let (sender, receiver) =
            futures::channel::mpsc::channel(crate::constants::camera::FRAME_CHANNEL_CAPACITY);
        let capture = match CameraPipeline::new(&gst_device, preferred, sender.clone()) {
            Ok(capture) => capture,
            Err(err)
                if preferred.is_some()
                    && !matches!(err, CameraError::PermissionDenied | CameraError::Busy) =>
            {
                warn!(error = %err, "Preferred size failed to start, using native mode");
                CameraPipeline::new(&gst_device, None, sender)?
            }
            Err(err) => return Err(err),
        };

        Ok(CameraStream::new(chosen.clone(), receiver, Box::new(capture)))
    }

    fn backend_type(&self) -> CameraBackendType {
        CameraBackendType::GStreamer
    }
}

/// List video sources together with their GStreamer devices
fn discover_devices() -> Result<Vec<(CameraDevice, gstreamer::Device)>, CameraError> {
    gstreamer::init().map_err(|e| CameraError::InitializationFailed(e.to_string()))?;

    let monitor = gstreamer::DeviceMonitor::new();
    monitor.add_filter(Some("Video/Source"), None);
    monitor
        .start()
        .map_err(|e| CameraError::BackendError(format!("Device monitor failed: {}", e)))?;

    let found: Vec<_> = monitor
        .devices()
        .into_iter()
        .map(|device| (describe_device(&device), device))
        .collect();
    monitor.stop();

    debug!(count = found.len(), "Enumerated video sources");
    Ok(found)
}

fn describe_device(device: &gstreamer::Device) -> CameraDevice {
    let name = device.display_name().to_string();
    let props = device.properties();
    let lookup = |keys: &[&str]| {
        props.as_ref().and_then(|s| {
            keys.iter()
                .find_map(|key| s.get::<String>(*key).ok().filter(|v| !v.is_empty()))
        })
    };

    CameraDevice {
        path: lookup(&PATH_KEYS).unwrap_or_else(|| name.clone()),
        camera_location: lookup(&LOCATION_KEYS),
        name,
    }
}

/// Source caps for one frame size, raw or MJPEG
fn size_caps(width: u32, height: u32) -> String {
    format!(
        "video/x-raw,width=(int){w},height=(int){h};image/jpeg,width=(int){w},height=(int){h}",
        w = width,
        h = height
    )
}

/// Whether the device advertises a mode of exactly `width`x`height`
fn supports_size(device: &gstreamer::Device, width: u32, height: u32) -> bool {
    let Some(advertised) = device.caps() else {
        debug!("Device does not advertise caps");
        return false;
    };
    match size_caps(width, height).parse::<gstreamer::Caps>() {
        Ok(wanted) => advertised.can_intersect(&wanted),
        Err(e) => {
            warn!(error = %e, "Invalid size caps");
            false
        }
    }
}

/// Everything downstream of the source element
///
/// With `preferred` set the source is pinned to that size before decoding.
fn pipeline_description(preferred: Option<(u32, u32)>) -> String {
    const CONVERT: &str = "decodebin ! videoconvert ! video/x-raw,format=RGBA ! appsink name=sink";
    match preferred {
        Some((width, height)) => {
            format!("capsfilter caps=\"{}\" ! {}", size_caps(width, height), CONVERT)
        }
        None => CONVERT.to_string(),
    }
}

/// Running capture pipeline; stops the camera when dropped
struct CameraPipeline {
    pipeline: gstreamer::Pipeline,
}

impl CameraPipeline {
    fn new(
        device: &gstreamer::Device,
        preferred: Option<(u32, u32)>,
        frame_sender: FrameSender,
    ) -> Result<Self, CameraError> {
        let source = device
            .create_element(Some("source"))
            .map_err(|e| CameraError::InitializationFailed(e.to_string()))?;

        let description = pipeline_description(preferred);
        debug!(%description, "Building pipeline");
        let bin = gstreamer::parse::bin_from_description(&description, true)
            .map_err(|e| CameraError::InitializationFailed(e.to_string()))?;

        let pipeline = gstreamer::Pipeline::new();
        pipeline
            .add_many([&source, bin.upcast_ref::<gstreamer::Element>()])
            .map_err(|e| CameraError::InitializationFailed(e.to_string()))?;
        source
            .link(&bin)
            .map_err(|e| CameraError::InitializationFailed(e.to_string()))?;

        let appsink = bin
            .by_name("sink")
            .ok_or_else(|| CameraError::InitializationFailed("Failed to get appsink".to_string()))?
            .dynamic_cast::<AppSink>()
            .map_err(|_| CameraError::InitializationFailed("Failed to cast appsink".to_string()))?;

        appsink.set_property("sync", false);
        appsink.set_property("max-buffers", pipeline::MAX_BUFFERS);
        appsink.set_property("drop", true);
        appsink.set_property("enable-last-sample", false);

        let mut sender = frame_sender;
        appsink.set_callbacks(
            gstreamer_app::AppSinkCallbacks::builder()
                .new_sample(move |appsink| {
                    let frame_start = Instant::now();
                    let frame_num = FRAME_COUNTER.fetch_add(1, Ordering::Relaxed);

                    let sample = appsink.pull_sample().map_err(|_| gstreamer::FlowError::Eos)?;
                    let buffer = sample.buffer().ok_or(gstreamer::FlowError::Error)?;
                    let caps = sample.caps().ok_or(gstreamer::FlowError::Error)?;
                    let info = VideoInfo::from_caps(caps).map_err(|e| {
                        error!(frame = frame_num, error = ?e, "Failed to get video info");
                        gstreamer::FlowError::Error
                    })?;
                    let map = buffer.map_readable().map_err(|_| gstreamer::FlowError::Error)?;
                    let (width, height) = (info.width(), info.height());
                    let stride = usize::try_from(info.stride()[0]).map_err(|_| {
                        error!(frame = frame_num, stride = info.stride()[0], "Negative stride");
                        gstreamer::FlowError::Error
                    })?;

                    let Some(data) = pack_rows(map.as_slice(), width, height, stride) else {
                        error!(
                            frame = frame_num,
                            size = map.size(),
                            width,
                            height,
                            stride,
                            "Buffer shorter than its video layout"
                        );
                        return Err(gstreamer::FlowError::Error);
                    };

                    let frame = CameraFrame {
                        width,
                        height,
                        data: data.into(),
                        captured_at: frame_start,
                    };

                    if frame_num % pipeline::FRAME_LOG_INTERVAL == 0 {
                        debug!(
                            frame = frame_num,
                            width = frame.width,
                            height = frame.height,
                            copy_us = frame_start.elapsed().as_micros(),
                            "Frame received"
                        );
                    }

                    // Drop the frame when the UI has not caught up
                    if sender.try_send(frame).is_err() && sender.is_closed() {
                        return Err(gstreamer::FlowError::Eos);
                    }
                    Ok(gstreamer::FlowSuccess::Ok)
                })
                .build(),
        );

        if let Err(e) = pipeline.set_state(gstreamer::State::Playing) {
            let reason = bus_error(&pipeline).unwrap_or_else(|| e.to_string());
            let _ = pipeline.set_state(gstreamer::State::Null);
            return Err(CameraError::from_backend_message(&reason));
        }

        let (result, state, _) = pipeline.state(gstreamer::ClockTime::from_seconds(
            pipeline::START_TIMEOUT_SECS,
        ));
        if result.is_err() {
            let reason = bus_error(&pipeline).unwrap_or_else(|| "Pipeline failed to start".into());
            let _ = pipeline.set_state(gstreamer::State::Null);
            return Err(CameraError::from_backend_message(&reason));
        }
        if state != gstreamer::State::Playing {
            warn!(?state, "Pipeline is not in PLAYING state yet");
        }

        info!("Camera pipeline playing");
        Ok(Self { pipeline })
    }
}

impl Drop for CameraPipeline {
    fn drop(&mut self) {
        debug!("Stopping camera pipeline");
        if let Err(e) = self.pipeline.set_state(gstreamer::State::Null) {
            warn!(error = %e, "Failed to stop camera pipeline");
        }
    }
}

/// First error message posted on the pipeline bus, if any
fn bus_error(pipeline: &gstreamer::Pipeline) -> Option<String> {
    let bus = pipeline.bus()?;
    let msg = bus.timed_pop_filtered(
        gstreamer::ClockTime::from_mseconds(100),
        &[gstreamer::MessageType::Error],
    )?;
    match msg.view() {
        gstreamer::MessageView::Error(err) => {
            error!(error = %err.error(), debug = ?err.debug(), "Pipeline error");
            Some(err.error().to_string())
        }
        _ => None,
    }
}

/// Copy RGBA rows out of a strided buffer
///
/// `None` when `data` is shorter than `height` rows of `stride` bytes (the
/// last row needs only its pixels) or the stride cannot hold a row.
fn pack_rows(data: &[u8], width: u32, height: u32, stride: usize) -> Option<Vec<u8>> {
    let row = width as usize * 4;
    let rows = height as usize;
    if row == 0 || rows == 0 {
        return Some(Vec::new());
    }
    if stride < row {
        return None;
    }
    let needed = stride.checked_mul(rows - 1)?.checked_add(row)?;
    let data = data.get(..needed)?;
    if stride == row {
        return Some(data.to_vec());
    }
    let mut packed = Vec::with_capacity(row * rows);
    for line in data.chunks(stride) {
        packed.extend_from_slice(&line[..row]);
    }
    Some(packed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_rows_drops_padding() {
        // 1x2 image, stride 8 (4 bytes of padding per row)
        let data = [1, 2, 3, 4, 0, 0, 0, 0, 5, 6, 7, 8, 0, 0, 0, 0];
        assert_eq!(pack_rows(&data, 1, 2, 8), Some(vec![1, 2, 3, 4, 5, 6, 7, 8]));
        // Trailing padding after the last row is optional
        assert_eq!(pack_rows(&data[..12], 1, 2, 8), Some(vec![1, 2, 3, 4, 5, 6, 7, 8]));
    }

    #[test]
    fn test_pack_rows_tight() {
        let data = [9u8; 16];
        assert_eq!(pack_rows(&data, 2, 2, 8), Some(data.to_vec()));
    }

    #[test]
    fn test_pack_rows_rejects_short_buffer() {
        // 2x2 at stride 12 needs 12 + 8 bytes
        assert_eq!(pack_rows(&[0u8; 19], 2, 2, 12), None);
        assert_eq!(pack_rows(&[0u8; 8], 2, 2, 8), None);
        // Stride narrower than a row
        assert_eq!(pack_rows(&[0u8; 64], 2, 2, 4), None);
        assert_eq!(pack_rows(&[], 0, 0, 0), Some(Vec::new()));
    }

    #[test]
    fn test_pipeline_pins_preferred_size_before_decoding() {
        let description = pipeline_description(Some((1280, 720)));
        assert!(description.starts_with(
            "capsfilter caps=\"video/x-raw,width=(int)1280,height=(int)720;\
             image/jpeg,width=(int)1280,height=(int)720\" ! decodebin"
        ));
        assert!(!description.contains("videoscale"));
    }

    #[test]
    fn test_pipeline_keeps_native_mode_without_preference() {
        let description = pipeline_description(None);
        assert_eq!(
            description,
            "decodebin ! videoconvert ! video/x-raw,format=RGBA ! appsink name=sink"
        );
    }
}
