//! Embeds and extracts length-framed messages on channel LSBs.

use alloc::vec::Vec;

use enough::Stop;
use tracing::debug;

use crate::bits::{self, LENGTH_FIELD_BITS};
use crate::color::ColorModel;
use crate::envelope::Envelope;
use crate::error::StegoError;
use crate::frame::{self, Frame};
use crate::limits::Limits;
use crate::pixel::PixelBuffer;
use crate::scan::{ScanOrder, Slots};
use crate::source::{ImageSink, ImageSource, SourceImage};

/// Slots visited between cancellation checks.
const STOP_INTERVAL: usize = 4096;

/// Bound image state, established by [`Engine::init_from_image`].
#[derive(Debug)]
struct Canvas {
    pixels: PixelBuffer,
    model: ColorModel,
    capacity_bits: u64,
}

impl Canvas {
    fn embeddable(&self) -> usize {
        self.model.embeddable_channels()
    }
}

/// LSB embedding engine bound to one image source.
///
/// The engine starts uninitialized. The first [`encode`](Self::encode) or
/// [`decode`](Self::decode) reads the source; after that it is ready and can
/// be reused against the same buffer. An engine is not meant to be shared:
/// encode and decode many images concurrently by giving each its own engine.
///
/// ```
/// use zenlsb::{Engine, PixelBuffer, SourceImage, Unstoppable};
///
/// let pixels = PixelBuffer::filled(4, 4, 3, 0x80)?;
/// let mut engine = Engine::new(SourceImage::new(pixels, "RGB"));
/// engine.encode(b"A", Unstoppable)?;
/// assert_eq!(engine.decode(Unstoppable)?, b"A");
/// # Ok::<(), zenlsb::StegoError>(())
/// ```
#[derive(Debug)]
pub struct Engine<S = SourceImage> {
    source: Option<S>,
    limits: Limits,
    order: ScanOrder,
    canvas: Option<Canvas>,
}

impl<S: ImageSource> Engine<S> {
    /// Create an engine bound to `source`. Nothing is read until first use.
    pub fn new(source: S) -> Self {
        Self {
            source: Some(source),
            limits: Limits::default(),
            order: ScanOrder::default(),
            canvas: None,
        }
    }

    /// Create an engine with no source. Encode and decode fail with
    /// [`StegoError::Uninitialized`] until [`bind`](Self::bind) is called.
    pub fn unbound() -> Self {
        Self {
            source: None,
            limits: Limits::default(),
            order: ScanOrder::default(),
            canvas: None,
        }
    }

    /// Bind a new source, discarding any previously read pixels.
    pub fn bind(&mut self, source: S) {
        self.source = Some(source);
        self.canvas = None;
    }

    /// Set resource limits. Takes effect at the next initialization.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self.canvas = None;
        self
    }

    /// Set the slot traversal order. Encoder and decoder must agree.
    pub fn with_scan_order(mut self, order: ScanOrder) -> Self {
        self.order = order;
        self
    }

    /// Read the bound source and resolve its color model.
    ///
    /// Calling this again re-reads the source, replacing the current buffer.
    pub fn init_from_image(&mut self) -> Result<(), StegoError> {
        let source = self.source.as_mut().ok_or(StegoError::Uninitialized)?;
        let SourceImage { pixels, mode } = source.read_image()?;
        let model = ColorModel::from_mode(&mode)?;

        self.limits.check(pixels.width(), pixels.height())?;

        let embeddable = model.embeddable_channels();
        if embeddable > pixels.channels() {
            return Err(StegoError::ChannelMismatch {
                model: model.mode(),
                embeddable,
                channels: pixels.channels(),
            });
        }

        let capacity_bits =
            u64::from(pixels.width()) * u64::from(pixels.height()) * embeddable as u64;
        debug!(
            width = pixels.width(),
            height = pixels.height(),
            model = model.mode(),
            capacity_bits,
            "bound image"
        );
        self.canvas = Some(Canvas {
            pixels,
            model,
            capacity_bits,
        });
        Ok(())
    }

    /// Whether an image has been read and validated.
    pub fn is_ready(&self) -> bool {
        self.canvas.is_some()
    }

    fn ready(&mut self) -> Result<&mut Canvas, StegoError> {
        if self.canvas.is_none() {
            self.init_from_image()?;
        }
        self.canvas.as_mut().ok_or(StegoError::Uninitialized)
    }

    /// Total embeddable bits (`width * height * embeddable channels`), once ready.
    pub fn capacity_bits(&self) -> Option<u64> {
        self.canvas.as_ref().map(|c| c.capacity_bits)
    }

    /// Largest message length `encode` will accept, once ready.
    pub fn max_message_len(&self) -> Option<usize> {
        self.canvas
            .as_ref()
            .map(|c| frame::max_message_len(c.capacity_bits, c.embeddable()))
    }

    pub fn color_model(&self) -> Option<ColorModel> {
        self.canvas.as_ref().map(|c| c.model)
    }

    /// Current pixels, once ready.
    pub fn pixels(&self) -> Option<&PixelBuffer> {
        self.canvas.as_ref().map(|c| &c.pixels)
    }

    /// Give up the engine and keep its pixels.
    pub fn into_pixels(self) -> Option<PixelBuffer> {
        self.canvas.map(|c| c.pixels)
    }

    /// Embed `message` and return the mutated pixels.
    ///
    /// Only bit 0 of the first embeddable channels of the first
    /// `frame_bits / embeddable` pixels in scan order changes. A frame
    /// exactly as large as the capacity is rejected.
    pub fn encode(&mut self, message: &[u8], stop: impl Stop) -> Result<&PixelBuffer, StegoError> {
        if message.is_empty() {
            return Err(StegoError::EmptyMessage);
        }
        let order = self.order;
        let limits = self.limits.clone();
        let canvas = self.ready()?;
        limits.check_message(message.len() as u64)?;

        let embeddable = canvas.embeddable();
        let frame_bits = frame::frame_bits(message.len(), embeddable);
        if frame_bits >= canvas.capacity_bits {
            return Err(StegoError::MessageTooLarge {
                frame_bits,
                capacity_bits: canvas.capacity_bits,
            });
        }

        stop.check()?;
        let frame = Frame::build(message, embeddable)?;
        write_frame(&mut canvas.pixels, embeddable, order, &frame, &stop)?;

        debug!(
            message_len = message.len(),
            frame_bits,
            padding = frame.padding(),
            "embedded frame"
        );
        Ok(&canvas.pixels)
    }

    /// Extract the message embedded by [`encode`](Self::encode).
    ///
    /// There is no checksum: pixels that were never encoded, or were
    /// re-compressed, yield garbage bytes or [`StegoError::InvalidFrameLength`].
    pub fn decode(&mut self, stop: impl Stop) -> Result<Vec<u8>, StegoError> {
        let order = self.order;
        let limits = self.limits.clone();
        let canvas = self.ready()?;

        let data = canvas.pixels.as_bytes();
        let mut slots = Slots::new(&canvas.pixels, canvas.embeddable(), order);

        let length_bits = read_lsbs(data, &mut slots, LENGTH_FIELD_BITS, &stop)?;
        let message_len = bits::bits_to_u32(&length_bits)?;
        limits.check_message(u64::from(message_len))?;

        // Never read past the image, whatever the length field claims.
        let message_bits = (u64::from(message_len) * 8).min(slots.len() as u64) as usize;
        let body = read_lsbs(data, &mut slots, message_bits, &stop)?;
        let message = bits::bits_to_message(&body)?;

        debug!(
            message_len,
            recovered = message.len(),
            "extracted frame"
        );
        Ok(message)
    }

    /// Seal `plaintext` with `envelope`, then embed the resulting payload.
    pub fn encode_sealed<E: Envelope>(
        &mut self,
        plaintext: &[u8],
        envelope: &E,
        stop: impl Stop,
    ) -> Result<&PixelBuffer, StegoError> {
        let payload = envelope.seal(plaintext)?;
        self.encode(&payload, stop)
    }

    /// Extract the embedded payload and open it with `envelope`.
    pub fn decode_opened<E: Envelope>(
        &mut self,
        envelope: &E,
        stop: impl Stop,
    ) -> Result<Vec<u8>, StegoError> {
        let payload = self.decode(stop)?;
        envelope.open(&payload)
    }

    /// Hand the current pixels to a sink.
    pub fn write_to<K: ImageSink + ?Sized>(&mut self, sink: &mut K) -> Result<(), StegoError> {
        let canvas = self.ready()?;
        sink.write_image(&canvas.pixels, canvas.model)
    }
}

fn write_frame(
    pixels: &mut PixelBuffer,
    embeddable: usize,
    order: ScanOrder,
    frame: &Frame,
    stop: &dyn Stop,
) -> Result<(), StegoError> {
    let slots = Slots::new(pixels, embeddable, order);
    let data = pixels.as_bytes_mut();
    for (i, (slot, &bit)) in slots.zip(frame.bits()).enumerate() {
        if i % STOP_INTERVAL == 0 {
            stop.check()?;
        }
        data[slot] = bits::set_lsb(data[slot], bit);
    }
    Ok(())
}

/// Collect up to `count` LSBs from the next slots.
fn read_lsbs(
    data: &[u8],
    slots: &mut Slots,
    count: usize,
    stop: &dyn Stop,
) -> Result<Vec<u8>, StegoError> {
    let mut out = Vec::with_capacity(count.min(slots.len()));
    for (i, slot) in slots.take(count).enumerate() {
        if i % STOP_INTERVAL == 0 {
            stop.check()?;
        }
        out.push(data[slot] & 1);
    }
    Ok(out)
}
