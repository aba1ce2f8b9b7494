//! Backend invocation seam.

/// The backend's file-processing surface.
///
/// Both operations are fire-and-forget: implementations hand the work off
/// (spawn a task, post to a worker, call into the host) and return
/// immediately so the UI turn never blocks on file-system or external
/// process work. Success and failure surface asynchronously on the message
/// stream, never through these calls.
pub trait Backend: Send + Sync {
    /// Initialize the manager in whatever eligible files live under `paths`.
    fn init_paths(&self, paths: Vec<String>);

    /// Fix up the files under `paths` for release.
    fn fix_paths(&self, paths: Vec<String>);
}
