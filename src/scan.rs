use crate::pixel::PixelBuffer;

/// Traversal order of embeddable channel slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScanOrder {
    /// Rows outer, columns inner, channels innermost.
    #[default]
    RowMajor,
    /// Columns outer, rows inner, channels innermost.
    ///
    /// This is the traversal used by older tools that index `[x][y]`;
    /// pick it to read images they produced.
    ColumnMajor,
}

/// Flat byte offsets of every embeddable channel in scan order.
///
/// Channels at or past `embeddable` (alpha, for RGBA) are never yielded.
#[derive(Clone, Debug)]
pub(crate) struct Slots {
    order: ScanOrder,
    width: usize,
    height: usize,
    stride: usize,
    embeddable: usize,
    outer: usize,
    inner: usize,
    channel: usize,
    remaining: usize,
}

impl Slots {
    pub(crate) fn new(pixels: &PixelBuffer, embeddable: usize, order: ScanOrder) -> Self {
        let width = pixels.width() as usize;
        let height = pixels.height() as usize;
        let embeddable = embeddable.min(pixels.channels());
        Self {
            order,
            width,
            height,
            stride: pixels.channels(),
            embeddable,
            outer: 0,
            inner: 0,
            channel: 0,
            remaining: width * height * embeddable,
        }
    }
}

impl Iterator for Slots {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let (row, col, inner_len) = match self.order {
            ScanOrder::RowMajor => (self.outer, self.inner, self.width),
            ScanOrder::ColumnMajor => (self.inner, self.outer, self.height),
        };
        let offset = (row * self.width + col) * self.stride + self.channel;

        self.remaining -= 1;
        self.channel += 1;
        if self.channel == self.embeddable {
            self.channel = 0;
            self.inner += 1;
            if self.inner == inner_len {
                self.inner = 0;
                self.outer += 1;
            }
        }
        Some(offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Slots {}
