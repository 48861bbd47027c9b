use std::fmt;

use crate::core::command_buffer::BufferCommand;
use crate::core::context::GizmoSubset;
use crate::core::drawing::DrawBatch;
use crate::scene::ObjectKey;

/// One `draw_renderers` call: the batch description plus the objects it drew,
/// in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRecord {
    pub batch: DrawBatch,
    pub objects: Vec<ObjectKey>,
}

/// A call made into the headless context.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    BeginProfilerSample(String),
    EndProfilerSample,
    EmitWorldGeometry { camera: String },
    Cull { visible: usize },
    SetupCameraProperties { camera: String },
    ExecuteCommandBuffer {
        buffer: String,
        commands: Vec<BufferCommand>,
    },
    DrawRenderers(DrawRecord),
    DrawSkybox { camera: String },
    DrawGizmos { camera: String, subset: GizmoSubset },
    Submit,
}

impl HostCall {
    /// Whether the call queues device work that only takes effect on submit.
    #[must_use]
    pub fn is_gpu_work(&self) -> bool {
        matches!(
            self,
            Self::SetupCameraProperties { .. }
                | Self::ExecuteCommandBuffer { .. }
                | Self::DrawRenderers(_)
                | Self::DrawSkybox { .. }
                | Self::DrawGizmos { .. }
        )
    }

    #[must_use]
    pub fn as_draw(&self) -> Option<&DrawRecord> {
        match self {
            Self::DrawRenderers(record) => Some(record),
            _ => None,
        }
    }
}

impl fmt::Display for HostCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeginProfilerSample(name) => write!(f, "profiler begin '{name}'"),
            Self::EndProfilerSample => write!(f, "profiler end"),
            Self::EmitWorldGeometry { camera } => write!(f, "emit scene-view geometry ({camera})"),
            Self::Cull { visible } => write!(f, "cull -> {visible} visible"),
            Self::SetupCameraProperties { camera } => write!(f, "setup camera '{camera}'"),
            Self::ExecuteCommandBuffer { buffer, commands } => {
                write!(f, "execute '{buffer}' ({} command(s))", commands.len())
            }
            Self::DrawRenderers(record) => write!(
                f,
                "draw renderers queues {}..={} passes {:?} -> {} object(s){}",
                record.batch.render_queue_range.lower_bound,
                record.batch.render_queue_range.upper_bound,
                record.batch.passes,
                record.objects.len(),
                if record.batch.override_material.is_some() {
                    " [override]"
                } else {
                    ""
                }
            ),
            Self::DrawSkybox { camera } => write!(f, "draw skybox ({camera})"),
            Self::DrawGizmos { camera, subset } => write!(f, "draw gizmos {subset:?} ({camera})"),
            Self::Submit => write!(f, "submit"),
        }
    }
}

/// Device work flushed by one `submit`, in queue order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Submission {
    pub work: Vec<HostCall>,
}

impl Submission {
    pub fn draws(&self) -> impl Iterator<Item = &DrawRecord> {
        self.work.iter().filter_map(HostCall::as_draw)
    }
}
