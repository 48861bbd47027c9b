//! Command Buffer
//!
//! A named, reusable list of commands. The frame renderer allocates exactly
//! one buffer at construction and reuses it for every camera and frame:
//! commands are queued, executed against the context, then the buffer is
//! cleared. Clearing keeps the allocation.

use std::borrow::Cow;

use bitflags::bitflags;
use glam::Vec4;

bitflags! {
    /// Which render target aspects a clear touches.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearFlags: u8 {
        const DEPTH = 1;
        const COLOR = 1 << 1;
    }
}

/// A queued buffer command.
#[derive(Debug, Clone, PartialEq)]
pub enum BufferCommand {
    ClearRenderTarget { flags: ClearFlags, background: Vec4 },
    BeginSample(Cow<'static, str>),
    EndSample(Cow<'static, str>),
}

#[derive(Debug, Clone)]
pub struct CommandBuffer {
    name: Cow<'static, str>,
    commands: Vec<BufferCommand>,
}

impl CommandBuffer {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            commands: Vec::with_capacity(4),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name as an owned handle. Cheap for constant names.
    #[inline]
    #[must_use]
    pub fn name_owned(&self) -> Cow<'static, str> {
        self.name.clone()
    }

    pub fn set_name(&mut self, name: impl Into<Cow<'static, str>>) {
        self.name = name.into();
    }

    pub fn clear_render_target(&mut self, flags: ClearFlags, background: Vec4) {
        self.commands.push(BufferCommand::ClearRenderTarget { flags, background });
    }

    pub fn begin_sample(&mut self, name: impl Into<Cow<'static, str>>) {
        self.commands.push(BufferCommand::BeginSample(name.into()));
    }

    pub fn end_sample(&mut self, name: impl Into<Cow<'static, str>>) {
        self.commands.push(BufferCommand::EndSample(name.into()));
    }

    /// Drops every queued command, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[inline]
    #[must_use]
    pub fn commands(&self) -> &[BufferCommand] {
        &self.commands
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Allocated command slots. Stays stable once a frame's worth of
    /// commands has been queued.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.commands.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_and_clear() {
        let mut buffer = CommandBuffer::new("Render Camera");
        buffer.clear_render_target(ClearFlags::all(), Vec4::ZERO);
        buffer.begin_sample("Render Camera");
        buffer.end_sample("Render Camera");
        assert_eq!(buffer.len(), 3);
        assert_eq!(
            buffer.commands()[1],
            BufferCommand::BeginSample(Cow::Borrowed("Render Camera"))
        );

        let capacity = buffer.capacity();
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), capacity);
    }

    #[test]
    fn test_rename() {
        let mut buffer = CommandBuffer::new("Render Camera");
        buffer.set_name(String::from("Main Camera"));
        assert_eq!(buffer.name(), "Main Camera");
    }
}
