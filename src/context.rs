//! Library context handle
//!
//! `Context` holds the per-library-instance state: which device the library
//! operates on, the compute stream work is submitted to, the pointer mode for
//! scalar arguments, and optional trace/bench logging sinks. It is a plain
//! record with construct/use/drop lifecycle; it performs no device calls and
//! the verification engine never touches it.

use std::fmt;
use std::io::Write;

/// Properties of the device a context is bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceProperties {
    /// Human-readable device name
    pub name: String,
    /// Threads per hardware wavefront/warp
    pub warp_size: u32,
    /// Number of compute units
    pub compute_units: u32,
}

impl Default for DeviceProperties {
    fn default() -> Self {
        Self {
            name: "device0".to_string(),
            warp_size: 64,
            compute_units: 1,
        }
    }
}

/// Opaque compute stream identifier
///
/// The default stream (id 0) is the system stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StreamId(pub u64);

impl StreamId {
    /// The default system stream
    pub const DEFAULT: Self = Self(0);
}

/// Where scalar parameters (alpha, beta) are read from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointerMode {
    /// Scalars are host pointers (default)
    #[default]
    Host,
    /// Scalars are device pointers
    Device,
}

/// Set of enabled logging layers
///
/// Combine with [`LayerMode::union`]; query with [`LayerMode::contains`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerMode {
    bits: u32,
}

impl LayerMode {
    /// Logging disabled
    pub const NONE: Self = Self { bits: 0 };

    /// Trace logging: one line per library call
    pub const LOG_TRACE: Self = Self { bits: 1 };

    /// Bench logging: reproducible invocation lines
    pub const LOG_BENCH: Self = Self { bits: 2 };

    /// Check if all layers of `other` are enabled
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Union of two layer sets
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }
}

/// Library context
///
/// Created once, passed to subsequent library calls, dropped at the end.
/// Construction never fails; log writers are flushed on drop.
pub struct Context {
    device: usize,
    properties: DeviceProperties,
    stream: StreamId,
    pointer_mode: PointerMode,
    layer_mode: LayerMode,
    log_trace_sink: Option<Box<dyn Write + Send>>,
    log_bench_sink: Option<Box<dyn Write + Send>>,
}

impl Context {
    /// Create a context bound to the default device
    pub fn new() -> Self {
        Self::with_device(0, DeviceProperties::default())
    }

    /// Create a context bound to a specific device
    pub fn with_device(device: usize, properties: DeviceProperties) -> Self {
        Self {
            device,
            properties,
            stream: StreamId::DEFAULT,
            pointer_mode: PointerMode::default(),
            layer_mode: LayerMode::NONE,
            log_trace_sink: None,
            log_bench_sink: None,
        }
    }

    /// Device id this context is bound to
    #[inline]
    pub fn device(&self) -> usize {
        self.device
    }

    /// Properties of the bound device
    #[inline]
    pub fn properties(&self) -> &DeviceProperties {
        &self.properties
    }

    /// Wavefront/warp size of the bound device
    #[inline]
    pub fn warp_size(&self) -> u32 {
        self.properties.warp_size
    }

    /// Current compute stream
    #[inline]
    pub fn stream(&self) -> StreamId {
        self.stream
    }

    /// Set the compute stream for subsequent work
    pub fn set_stream(&mut self, stream: StreamId) {
        self.stream = stream;
    }

    /// Current pointer mode
    #[inline]
    pub fn pointer_mode(&self) -> PointerMode {
        self.pointer_mode
    }

    /// Set the pointer mode
    pub fn set_pointer_mode(&mut self, mode: PointerMode) {
        self.pointer_mode = mode;
    }

    /// Enabled logging layers
    #[inline]
    pub fn layer_mode(&self) -> LayerMode {
        self.layer_mode
    }

    /// Set the enabled logging layers
    pub fn set_layer_mode(&mut self, mode: LayerMode) {
        self.layer_mode = mode;
    }

    /// Install the trace log sink
    pub fn set_log_trace(&mut self, sink: Box<dyn Write + Send>) {
        self.log_trace_sink = Some(sink);
    }

    /// Install the bench log sink
    pub fn set_log_bench(&mut self, sink: Box<dyn Write + Send>) {
        self.log_bench_sink = Some(sink);
    }

    /// Append a line to the trace log
    ///
    /// No-op unless the `LOG_TRACE` layer is enabled and a sink is installed.
    pub fn log_trace(&mut self, line: &str) {
        if self.layer_mode.contains(LayerMode::LOG_TRACE) {
            if let Some(sink) = self.log_trace_sink.as_mut() {
                let _ = writeln!(sink, "{}", line);
            }
        }
    }

    /// Append a line to the bench log
    ///
    /// No-op unless the `LOG_BENCH` layer is enabled and a sink is installed.
    pub fn log_bench(&mut self, line: &str) {
        if self.layer_mode.contains(LayerMode::LOG_BENCH) {
            if let Some(sink) = self.log_bench_sink.as_mut() {
                let _ = writeln!(sink, "{}", line);
            }
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("device", &self.device)
            .field("properties", &self.properties)
            .field("stream", &self.stream)
            .field("pointer_mode", &self.pointer_mode)
            .field("layer_mode", &self.layer_mode)
            .field("log_trace", &self.log_trace_sink.is_some())
            .field("log_bench", &self.log_bench_sink.is_some())
            .finish()
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        if let Some(sink) = self.log_trace_sink.as_mut() {
            let _ = sink.flush();
        }
        if let Some(sink) = self.log_bench_sink.as_mut() {
            let _ = sink.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_defaults() {
        let ctx = Context::new();
        assert_eq!(ctx.device(), 0);
        assert_eq!(ctx.stream(), StreamId::DEFAULT);
        assert_eq!(ctx.pointer_mode(), PointerMode::Host);
        assert_eq!(ctx.layer_mode(), LayerMode::NONE);
        assert_eq!(ctx.warp_size(), 64);
    }

    #[test]
    fn test_stream_and_pointer_mode() {
        let mut ctx = Context::new();
        ctx.set_stream(StreamId(42));
        assert_eq!(ctx.stream(), StreamId(42));
        ctx.set_pointer_mode(PointerMode::Device);
        assert_eq!(ctx.pointer_mode(), PointerMode::Device);
    }

    #[test]
    fn test_layer_mode_set() {
        let both = LayerMode::LOG_TRACE.union(LayerMode::LOG_BENCH);
        assert!(both.contains(LayerMode::LOG_TRACE));
        assert!(both.contains(LayerMode::LOG_BENCH));
        assert!(LayerMode::NONE.contains(LayerMode::NONE));
        assert!(!LayerMode::LOG_TRACE.contains(LayerMode::LOG_BENCH));
    }

    #[test]
    fn test_trace_logging_gated_by_layer() {
        let buf = SharedBuf::default();
        let mut ctx = Context::new();
        ctx.set_log_trace(Box::new(buf.clone()));

        // Layer disabled: nothing written
        ctx.log_trace("spmv m=100 n=100");
        assert!(buf.0.lock().unwrap().is_empty());

        ctx.set_layer_mode(LayerMode::LOG_TRACE);
        ctx.log_trace("spmv m=100 n=100");
        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, "spmv m=100 n=100\n");
    }

    #[test]
    fn test_bench_logging() {
        let buf = SharedBuf::default();
        let mut ctx = Context::new();
        ctx.set_log_bench(Box::new(buf.clone()));
        ctx.set_layer_mode(LayerMode::LOG_BENCH);
        ctx.log_bench("./bench -f spmv");
        // Trace layer is off; trace call must not write to the bench sink
        ctx.log_trace("ignored");
        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, "./bench -f spmv\n");
    }
}
