use crate::shared::frame::Frame;

/// Source of live frames, polled once per tick.
///
/// `None` means no frame is ready right now; the tick is skipped and the
/// source is simply polled again next time. Device failures that make the
/// source unusable are a startup concern of the implementation.
pub trait FrameSource: Send {
    fn try_read_frame(&mut self) -> Option<Frame>;
}
